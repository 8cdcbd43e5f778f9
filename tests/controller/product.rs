use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use luxe::{
    model::product::{CreateProductDto, ProductDto, UpdateProductDto},
    server::{
        controller::product::{create_product, delete_product, get_product, update_product},
        model::session::user::SessionUserId,
    },
};
use serde_json::Value;

use super::*;

fn lamp_dto() -> CreateProductDto {
    CreateProductDto {
        name: Some("Desk Lamp".to_string()),
        price: Some(24.5),
        quantity: Some(4),
        description: None,
        category: Some("Home".to_string()),
        image: Some("https://cdn.example.com/lamp.png".to_string()),
    }
}

/// Expect 201 with the listed product
#[tokio::test]
async fn create_product_returns_created() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let seller = test.user().insert_user("Ada", "ada@example.com").await?;
    SessionUserId::insert(&test.session, seller.id).await.unwrap();
    let state: AppState = test.state();

    let result = create_product(State(state), test.session.clone(), Json(lamp_dto())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let product: ProductDto = read_json(resp).await;
    assert_eq!(product.seller.id, seller.id);

    Ok(())
}

/// Expect 400 when the image is missing
#[tokio::test]
async fn create_product_requires_image() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let seller = test.user().insert_user("Ada", "ada@example.com").await?;
    SessionUserId::insert(&test.session, seller.id).await.unwrap();
    let state: AppState = test.state();

    let result = create_product(
        State(state),
        test.session.clone(),
        Json(CreateProductDto {
            image: None,
            ..lamp_dto()
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(resp).await;
    assert_eq!(body["message"], "Product image is required");

    Ok(())
}

/// Expect 404 for a product that does not exist
#[tokio::test]
async fn get_product_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;
    let state: AppState = test.state();

    let result = get_product(State(state), Path(42)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = read_json(resp).await;
    assert_eq!(body["message"], "Product not found");

    Ok(())
}

/// Expect 403 when updating another seller's product
#[tokio::test]
async fn update_product_rejects_other_seller() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let seller = test.user().insert_user("Ada", "ada@example.com").await?;
    let other = test.user().insert_user("Grace", "grace@example.com").await?;
    let lamp = test.product().insert_product(seller.id, "Lamp", 20.0, 2).await?;
    SessionUserId::insert(&test.session, other.id).await.unwrap();
    let state: AppState = test.state();

    let result = update_product(
        State(state),
        test.session.clone(),
        Path(lamp.id),
        Json(UpdateProductDto {
            price: Some(1.0),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 200 with the confirmation message
#[tokio::test]
async fn delete_product_confirms_deletion() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let seller = test.user().insert_user("Ada", "ada@example.com").await?;
    let lamp = test.product().insert_product(seller.id, "Lamp", 20.0, 2).await?;
    SessionUserId::insert(&test.session, seller.id).await.unwrap();
    let state: AppState = test.state();

    let result = delete_product(State(state), test.session.clone(), Path(lamp.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert_eq!(body["message"], "Product deleted successfully");

    Ok(())
}
