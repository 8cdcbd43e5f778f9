use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use luxe::{
    model::expense::{ExpenseDto, ExpenseInputDto},
    server::{
        controller::expense::{create_expense, delete_expense, get_expense},
        model::session::user::SessionUserId,
    },
};
use serde_json::Value;

use super::*;

/// Expect 201 with the recorded entry
#[tokio::test]
async fn create_expense_returns_created() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let user = test.user().insert_user("Ada", "ada@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let state: AppState = test.state();

    let result = create_expense(
        State(state),
        test.session.clone(),
        Json(ExpenseInputDto {
            title: Some("Groceries".to_string()),
            amount: Some(45.0),
            category: Some("Food".to_string()),
            payment_method: Some("Card".to_string()),
            note: None,
            date: NaiveDate::from_ymd_opt(2025, 3, 4),
            kind: Some("Expense".to_string()),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let expense: ExpenseDto = read_json(resp).await;
    assert_eq!(expense.user_id, user.id);

    Ok(())
}

/// Expect 404 when reading an entry of another user
#[tokio::test]
async fn get_expense_hides_other_users_entry() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let ada = test.user().insert_user("Ada", "ada@example.com").await?;
    let grace = test.user().insert_user("Grace", "grace@example.com").await?;
    let expense = test
        .expense()
        .insert_expense(
            ada.id,
            "Lunch",
            "Expense",
            12.0,
            "Food",
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
        )
        .await?;
    SessionUserId::insert(&test.session, grace.id).await.unwrap();
    let state: AppState = test.state();

    let result = get_expense(State(state), test.session.clone(), Path(expense.id)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = read_json(resp).await;
    assert_eq!(body["message"], "Expense not found");

    Ok(())
}

/// Expect 200 with the confirmation message
#[tokio::test]
async fn delete_expense_confirms_deletion() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let user = test.user().insert_user("Ada", "ada@example.com").await?;
    let expense = test
        .expense()
        .insert_expense(
            user.id,
            "Lunch",
            "Expense",
            12.0,
            "Food",
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
        )
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let state: AppState = test.state();

    let result = delete_expense(State(state), test.session.clone(), Path(expense.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert_eq!(body["message"], "Expense deleted successfully");

    Ok(())
}
