//! Error types for the Luxe server application.
//!
//! Errors are grouped by domain (authentication, configuration, payment gateway) and
//! aggregated into [`Error`], which every controller returns. All errors implement
//! `IntoResponse`, so a handler can bubble any failure up with `?` and the client receives
//! the matching status code with an [`ErrorDto`] body.

pub mod auth;
pub mod config;
pub mod payment;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, InvalidVariant},
    server::error::{auth::AuthError, config::ConfigError, payment::PaymentError},
};

/// Main error type for the Luxe server application.
///
/// Request validation failures carry the message shown to the client. Library errors
/// (database, session store, hashing) are converted with `?` and surface as a generic
/// 500 response while the detailed message is logged.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing session, bad credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Payment gateway error (unreachable gateway, failed payment).
    #[error(transparent)]
    PaymentError(#[from] PaymentError),
    /// The request is malformed or violates a field constraint.
    #[error("{0}")]
    BadRequest(String),
    /// The caller is authenticated but may not act on the resource.
    #[error("{0}")]
    Forbidden(String),
    /// The requested resource does not exist or is not visible to the caller.
    #[error("{0}")]
    NotFound(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// A stored enumerated column holds a value the application does not know.
    #[error("Stored value is not valid: {0}")]
    InvalidStoredValue(#[from] InvalidVariant),
    /// Internal error indicating a bug or an inconsistent database state.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Password hashing error.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    fn client_error(status: StatusCode, message: String) -> Response {
        tracing::debug!(status = %status, "{}", message);

        (status, Json(ErrorDto { message })).into_response()
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and rejected payments
/// - 401 Unauthorized - Missing or stale session, invalid credentials
/// - 403 Forbidden - Acting on another user's resource
/// - 404 Not Found - Missing resources
/// - 502 Bad Gateway - Payment gateway failures
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::PaymentError(err) => err.into_response(),
            Self::BadRequest(message) => Self::client_error(StatusCode::BAD_REQUEST, message),
            Self::Forbidden(message) => Self::client_error(StatusCode::FORBIDDEN, message),
            Self::NotFound(message) => Self::client_error(StatusCode::NOT_FOUND, message),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
