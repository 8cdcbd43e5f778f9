use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use luxe::{
    model::order::{CreateOrderDto, CreatedOrderDto, OrderLineInputDto},
    server::{
        controller::order::{cancel_order, create_order},
        model::session::user::SessionUserId,
    },
};
use serde_json::Value;

use super::*;

/// Expect 201 with the order ID and total
#[tokio::test]
async fn create_order_returns_total() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let seller = test.user().insert_user("Seller", "seller@example.com").await?;
    let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;
    let lamp = test.product().insert_product(seller.id, "Lamp", 12.5, 5).await?;
    SessionUserId::insert(&test.session, buyer.id).await.unwrap();
    let state: AppState = test.state();

    let result = create_order(
        State(state),
        test.session.clone(),
        Json(CreateOrderDto {
            products: Some(vec![OrderLineInputDto {
                product: lamp.id,
                quantity: Some(2),
            }]),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: CreatedOrderDto = read_json(resp).await;
    assert_eq!(created.total_amount, 25.0);

    Ok(())
}

/// Expect 403 when buying one's own product
#[tokio::test]
async fn create_order_rejects_own_product() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let seller = test.user().insert_user("Seller", "seller@example.com").await?;
    let lamp = test.product().insert_product(seller.id, "Lamp", 12.5, 5).await?;
    SessionUserId::insert(&test.session, seller.id).await.unwrap();
    let state: AppState = test.state();

    let result = create_order(
        State(state),
        test.session.clone(),
        Json(CreateOrderDto {
            products: Some(vec![OrderLineInputDto {
                product: lamp.id,
                quantity: None,
            }]),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 400 when cancelling an order that is no longer pending
#[tokio::test]
async fn cancel_order_rejects_paid_order() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let seller = test.user().insert_user("Seller", "seller@example.com").await?;
    let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;
    let lamp = test.product().insert_product(seller.id, "Lamp", 12.5, 5).await?;
    let (order, _) = test
        .order()
        .insert_order(buyer.id, "paid", &[(&lamp, 1)])
        .await?;
    SessionUserId::insert(&test.session, buyer.id).await.unwrap();
    let state: AppState = test.state();

    let result = cancel_order(State(state), test.session.clone(), Path(order.id)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(resp).await;
    assert_eq!(body["message"], "Only pending orders can be cancelled");

    Ok(())
}
