use super::*;

/// Expect the user's listed products and placed orders to be included
#[tokio::test]
async fn includes_products_and_orders() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let ada = test.user().insert_user("Ada", "ada@example.com").await?;
    let grace = test.user().insert_user("Grace", "grace@example.com").await?;
    test.product().insert_product(ada.id, "Lamp", 20.0, 2).await?;
    let desk = test.product().insert_product(grace.id, "Desk", 80.0, 2).await?;
    test.order()
        .insert_order(ada.id, "pending", &[(&desk, 1)])
        .await?;

    let user_service = UserService::new(&test.state.db);
    let detail = user_service.get_user_detail(ada.id).await.unwrap().unwrap();

    assert_eq!(detail.user.id, ada.id);
    assert_eq!(detail.products.len(), 1);
    assert_eq!(detail.products[0].name, "Lamp");
    assert_eq!(detail.orders.len(), 1);
    assert_eq!(detail.orders[0].items[0].name, "Desk");

    Ok(())
}

/// Expect None for a user that does not exist
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service.get_user_detail(1).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}
