use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        payment::{InitiatePaymentDto, PaymentInitializationDto, PaymentVerifiedDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::payment::PaymentService,
    },
};

pub static PAYMENT_TAG: &str = "payment";

/// Starts a payment for an order, the client redirects the buyer to the returned checkout page
#[utoipa::path(
    post,
    path = "/payment/initiate",
    tag = PAYMENT_TAG,
    request_body = InitiatePaymentDto,
    responses(
        (status = 200, description = "Checkout page created", body = PaymentInitializationDto),
        (status = 400, description = "Order ID missing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Order was placed by someone else", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 502, description = "Payment gateway error", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn initiate_payment(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<InitiatePaymentDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let checkout = PaymentService::new(&state.db, &state.paystack)
        .initiate(user.id, dto)
        .await?;

    Ok((StatusCode::OK, Json(checkout)))
}

/// Confirms a payment with the gateway and marks its order as paid
///
/// Called when the gateway redirects the buyer back, so no session is required.
#[utoipa::path(
    get,
    path = "/payment/verify/{reference}",
    tag = PAYMENT_TAG,
    params(("reference" = String, Path, description = "Gateway transaction reference")),
    responses(
        (status = 200, description = "Payment verified", body = PaymentVerifiedDto),
        (status = 400, description = "Payment not successful", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 502, description = "Payment gateway error", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_payment(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let order = PaymentService::new(&state.db, &state.paystack)
        .verify(&reference)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaymentVerifiedDto {
            message: "Payment verified".to_string(),
            order,
        }),
    ))
}
