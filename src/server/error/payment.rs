use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Request to payment gateway failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Payment gateway responded with status {status}: {message}")]
    Gateway { status: u16, message: String },
    #[error("Payment {reference} was not successful, gateway status: {status}")]
    NotSuccessful { reference: String, status: String },
    #[error("Payment {0} is not linked to an order")]
    MissingOrderReference(String),
    #[error("Payment {reference} of {paid} does not match the order total of {expected}")]
    AmountMismatch {
        reference: String,
        paid: i64,
        expected: i64,
    },
    #[error("Payment gateway URL is not valid: {0}")]
    InvalidBaseUrl(String),
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Request(_) | Self::Gateway { .. } => {
                tracing::error!("{}", self);

                (StatusCode::BAD_GATEWAY, "Payment gateway error")
            }
            Self::NotSuccessful { .. } => {
                tracing::debug!("{}", self);

                (StatusCode::BAD_REQUEST, "Payment not successful")
            }
            Self::MissingOrderReference(_) => {
                tracing::warn!("{}", self);

                (StatusCode::BAD_REQUEST, "Payment is not linked to an order")
            }
            Self::AmountMismatch { .. } => {
                tracing::warn!("{}", self);

                (StatusCode::BAD_REQUEST, "Payment amount does not match the order total")
            }
            Self::InvalidBaseUrl(_) => {
                tracing::error!("{}", self);

                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
