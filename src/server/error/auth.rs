use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    NotLoggedIn,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("No account is registered for the provided email")]
    UnknownEmail,
    #[error("Password does not match the stored hash")]
    InvalidCredentials,
    #[error("An account with the provided email already exists")]
    EmailInUse,
}

impl AuthError {
    fn respond(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(ErrorDto {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotLoggedIn => {
                Self::respond(StatusCode::UNAUTHORIZED, "Not authorized, please login")
            }
            Self::UserNotInDatabase(_) => {
                Self::respond(StatusCode::UNAUTHORIZED, "Not authorized, user not found")
            }
            Self::UnknownEmail => Self::respond(
                StatusCode::NOT_FOUND,
                "User Not Found, please create an account",
            ),
            Self::InvalidCredentials => {
                Self::respond(StatusCode::UNAUTHORIZED, "Invalid Credentials")
            }
            Self::EmailInUse => Self::respond(StatusCode::BAD_REQUEST, "Email already in use."),
        }
    }
}
