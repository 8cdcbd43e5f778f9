use chrono::NaiveDate;

use crate::server::service::order::OrderService;

use super::*;

/// Expect the user and their dependent rows to be deleted
#[tokio::test]
async fn deletes_user_and_dependent_rows() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let ada = test.user().insert_user("Ada", "ada@example.com").await?;
    let grace = test.user().insert_user("Grace", "grace@example.com").await?;
    let lamp = test.product().insert_product(ada.id, "Lamp", 20.0, 2).await?;
    let desk = test.product().insert_product(grace.id, "Desk", 80.0, 2).await?;
    test.user().insert_cart_item(ada.id, desk.id, 1).await?;
    test.user().insert_cart_item(grace.id, lamp.id, 1).await?;
    test.notification()
        .insert_notification(ada.id, "product", "Listed")
        .await?;
    test.expense()
        .insert_expense(
            ada.id,
            "Rent",
            "Expense",
            900.0,
            "Bills",
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
        .await?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service.delete_user(ada.id).await;

    assert!(matches!(result, Ok(true)));
    assert!(user_service.get_user(ada.id).await.unwrap().is_none());
    assert!(CartRepository::new(&test.state.db)
        .get_by_user(grace.id)
        .await?
        .is_empty());
    assert!(ExpenseRepository::new(&test.state.db)
        .get_by_user(ada.id)
        .await?
        .is_empty());

    Ok(())
}

/// Expect Ok(false) when deleting a user that does not exist
#[tokio::test]
async fn returns_false_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service.delete_user(1).await;

    assert!(matches!(result, Ok(false)));

    Ok(())
}

/// Expect a buyer with order history to be deleted while their orders remain
#[tokio::test]
async fn keeps_orders_of_deleted_buyer() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let ada = test.user().insert_user("Ada", "ada@example.com").await?;
    let grace = test.user().insert_user("Grace", "grace@example.com").await?;
    let desk = test.product().insert_product(grace.id, "Desk", 80.0, 2).await?;
    let (order, _) = test
        .order()
        .insert_order(ada.id, "delivered", &[(&desk, 1)])
        .await?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service.delete_user(ada.id).await;

    assert!(matches!(result, Ok(true)));
    assert!(user_service.get_user(ada.id).await.unwrap().is_none());

    let stored_order = OrderRepository::new(&test.state.db)
        .get(order.id)
        .await?
        .unwrap();
    assert_eq!(stored_order.buyer_id, None);
    assert_eq!(stored_order.status, "delivered");

    let seller_orders = OrderService::new(&test.state.db)
        .get_by_seller(grace.id)
        .await
        .unwrap();
    assert_eq!(seller_orders.len(), 1);
    assert!(seller_orders[0].buyer.is_none());
    assert_eq!(seller_orders[0].items[0].seller_id, Some(grace.id));

    Ok(())
}

/// Expect a seller whose product was ordered to be deleted while the order line keeps its
/// name and price
#[tokio::test]
async fn keeps_order_lines_of_deleted_seller() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let ada = test.user().insert_user("Ada", "ada@example.com").await?;
    let grace = test.user().insert_user("Grace", "grace@example.com").await?;
    let desk = test.product().insert_product(grace.id, "Desk", 80.0, 2).await?;
    let (order, _) = test
        .order()
        .insert_order(ada.id, "paid", &[(&desk, 2)])
        .await?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service.delete_user(grace.id).await;

    assert!(matches!(result, Ok(true)));
    assert!(ProductRepository::new(&test.state.db)
        .get(desk.id)
        .await?
        .is_none());

    let buyer_orders = OrderService::new(&test.state.db)
        .get_by_buyer(ada.id)
        .await
        .unwrap();
    assert_eq!(buyer_orders.len(), 1);
    assert_eq!(buyer_orders[0].id, order.id);
    assert_eq!(buyer_orders[0].total_amount, 160.0);
    let line = &buyer_orders[0].items[0];
    assert_eq!(line.product_id, None);
    assert_eq!(line.seller_id, None);
    assert_eq!(line.name, "Desk");
    assert_eq!(line.price, 80.0);
    assert_eq!(line.quantity, 2);

    Ok(())
}
