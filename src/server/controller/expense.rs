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
        expense::{ExpenseDto, ExpenseInputDto, ExpenseSummaryDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::expense::ExpenseService,
    },
};

pub static EXPENSE_TAG: &str = "expense";

/// Records an income or expense entry
#[utoipa::path(
    post,
    path = "/expense/create-expense",
    tag = EXPENSE_TAG,
    request_body = ExpenseInputDto,
    responses(
        (status = 201, description = "Entry recorded", body = ExpenseDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_expense(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<ExpenseInputDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let expense = ExpenseService::new(&state.db).create(user.id, dto).await?;

    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    get,
    path = "/expense/get-all-expenses",
    tag = EXPENSE_TAG,
    responses(
        (status = 200, description = "Entries of the user, most recently recorded first", body = Vec<ExpenseDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_expenses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let expenses = ExpenseService::new(&state.db).get_all(user.id).await?;

    Ok((StatusCode::OK, Json(expenses)))
}

#[utoipa::path(
    get,
    path = "/expense/get-expense/{id}",
    tag = EXPENSE_TAG,
    params(("id" = i32, Path, description = "Expense ID")),
    responses(
        (status = 200, description = "Entry found", body = ExpenseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Expense not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expense(
    State(state): State<AppState>,
    session: Session,
    Path(expense_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let expense = ExpenseService::new(&state.db)
        .get(user.id, expense_id)
        .await?;

    Ok((StatusCode::OK, Json(expense)))
}

/// Updates the provided fields of an entry
#[utoipa::path(
    put,
    path = "/expense/update-expense/{id}",
    tag = EXPENSE_TAG,
    params(("id" = i32, Path, description = "Expense ID")),
    request_body = ExpenseInputDto,
    responses(
        (status = 200, description = "Entry updated", body = ExpenseDto),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Expense not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_expense(
    State(state): State<AppState>,
    session: Session,
    Path(expense_id): Path<i32>,
    Json(dto): Json<ExpenseInputDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let expense = ExpenseService::new(&state.db)
        .update(user.id, expense_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(expense)))
}

#[utoipa::path(
    delete,
    path = "/expense/delete-expense/{id}",
    tag = EXPENSE_TAG,
    params(("id" = i32, Path, description = "Expense ID")),
    responses(
        (status = 200, description = "Entry deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Expense not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_expense(
    State(state): State<AppState>,
    session: Session,
    Path(expense_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    ExpenseService::new(&state.db)
        .delete(user.id, expense_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Expense deleted successfully")),
    ))
}

/// Totals for the dashboard charts
#[utoipa::path(
    get,
    path = "/expense/summary",
    tag = EXPENSE_TAG,
    responses(
        (status = 200, description = "Income and spending totals", body = ExpenseSummaryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let summary = ExpenseService::new(&state.db).summary(user.id).await?;

    Ok((StatusCode::OK, Json(summary)))
}
