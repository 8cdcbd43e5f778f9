use axum::http::StatusCode;

use super::*;

/// Expect the web client's transaction form to be stored with its payment method
#[tokio::test]
async fn stores_payment_method_from_client_form() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;
    let app = app(&test);
    let cookie = register(&app, "Ada Lovelace", "ada@example.com").await;

    let response = send(
        &app,
        Method::POST,
        "/expense/create-expense",
        Some(json!({
            "title": "Lunch",
            "type": "Expense",
            "amount": 12.5,
            "category": "Food",
            "date": "2025-03-02",
            "paymentMethod": "Card"
        })),
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let expense: Value = read_json(response).await;
    assert_eq!(expense["paymentMethod"], "Card");
    assert_eq!(expense["type"], "Expense");

    Ok(())
}

/// Expect validation failures to reach the client under `message`
#[tokio::test]
async fn reports_validation_error_as_message() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;
    let app = app(&test);
    let cookie = register(&app, "Ada Lovelace", "ada@example.com").await;

    let response = send(
        &app,
        Method::POST,
        "/expense/create-expense",
        Some(json!({ "title": "Lunch", "amount": 12.5 })),
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await;
    assert_eq!(
        body["message"],
        "Please provide all required fields including type"
    );

    Ok(())
}
