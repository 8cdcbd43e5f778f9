use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::product::ProductService,
    },
};

pub static PRODUCT_TAG: &str = "product";

/// Lists a new product for sale by the logged in user
#[utoipa::path(
    post,
    path = "/product/create-product",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product listed", body = ProductDto),
        (status = 400, description = "Image missing or invalid field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateProductDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let product = ProductService::new(&state.db).create(user.id, dto).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Gets every listed product, newest first
#[utoipa::path(
    get,
    path = "/product/get-all-products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_products(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let products = ProductService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/product/get-product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(product) = ProductService::new(&state.db).get(product_id).await? else {
        return Err(Error::NotFound("Product not found".to_string()));
    };

    Ok((StatusCode::OK, Json(product)))
}

/// Gets the products listed by the logged in user, newest first
#[utoipa::path(
    get,
    path = "/product/get-seller-products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Products of the seller", body = Vec<ProductDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seller_products(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let products = ProductService::new(&state.db).get_by_seller(user.id).await?;

    Ok((StatusCode::OK, Json(products)))
}

/// Updates the provided fields of one of the logged in user's products
#[utoipa::path(
    put,
    path = "/product/update-product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Product belongs to another seller", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
    Json(dto): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let product = ProductService::new(&state.db)
        .update(user.id, product_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    delete,
    path = "/product/delete-product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageDto),
        (status = 400, description = "Product has orders", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Product belongs to another seller", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    ProductService::new(&state.db)
        .delete(user.id, product_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Product deleted successfully")),
    ))
}
