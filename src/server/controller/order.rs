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
        order::{CreateOrderDto, CreatedOrderDto, OrderDto, UpdateOrderStatusDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::order::OrderService,
    },
};

pub static ORDER_TAG: &str = "order";

/// Places an order, reserving stock for every line
#[utoipa::path(
    post,
    path = "/order/create-order",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = CreatedOrderDto),
        (status = 400, description = "Empty order, unknown product or insufficient stock", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Order includes the buyer's own product", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let order = OrderService::new(&state.db).create(user.id, dto).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Gets the orders placed by the logged in user
#[utoipa::path(
    get,
    path = "/order/my-orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Orders of the buyer", body = Vec<OrderDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let orders = OrderService::new(&state.db).get_by_buyer(user.id).await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// Cancels a pending order and restores its stock
#[utoipa::path(
    put,
    path = "/order/cancel-order/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled", body = MessageDto),
        (status = 400, description = "Order is not pending", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Order was placed by someone else", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    OrderService::new(&state.db).cancel(user.id, order_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Order cancelled"))))
}

/// Gets the orders containing products listed by the logged in user
#[utoipa::path(
    get,
    path = "/order/seller-orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Orders of the seller's products", body = Vec<OrderDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seller_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let orders = OrderService::new(&state.db).get_by_seller(user.id).await?;

    Ok((StatusCode::OK, Json(orders)))
}

#[utoipa::path(
    get,
    path = "/order/get-all-orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Every order", body = Vec<OrderDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let orders = OrderService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// Sets the status of an order and notifies its buyer
#[utoipa::path(
    put,
    path = "/order/update-order-status/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
    Json(dto): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let order = OrderService::new(&state.db)
        .update_status(order_id, dto.status)
        .await?;

    Ok((StatusCode::OK, Json(order)))
}
