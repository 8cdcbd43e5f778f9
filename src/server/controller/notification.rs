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
        notification::NotificationDto,
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::notification::NotificationService,
    },
};

pub static NOTIFICATION_TAG: &str = "notification";

#[utoipa::path(
    get,
    path = "/notification/get-all-notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications of the user, newest first", body = Vec<NotificationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let notifications = NotificationService::new(&state.db).get_all(user.id).await?;

    Ok((StatusCode::OK, Json(notifications)))
}

#[utoipa::path(
    delete,
    path = "/notification/delete-notification/{id}",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    NotificationService::new(&state.db)
        .delete(user.id, notification_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Notification deleted"))))
}

#[utoipa::path(
    delete,
    path = "/notification/delete-all-notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Every notification of the user deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_all_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    NotificationService::new(&state.db).delete_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("All notifications deleted")),
    ))
}
