use axum::http::StatusCode;

use super::*;

/// Expect the OpenAPI document to list the resource routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;
    let app = app(&test);

    let response = send(&app, Method::GET, "/api/docs/openapi.json", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let document: Value = read_json(response).await;
    assert!(document["paths"].get("/user/register").is_some());
    assert!(document["paths"].get("/payment/verify/{reference}").is_some());

    Ok(())
}

/// Expect 401 for protected routes without a session cookie
#[tokio::test]
async fn rejects_requests_without_session() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;
    let app = app(&test);

    let response = send(&app, Method::GET, "/user/get-cart", None, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = read_json(response).await;
    assert_eq!(body["message"], "Not authorized, please login");

    Ok(())
}
