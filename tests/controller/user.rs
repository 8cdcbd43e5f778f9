use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use luxe::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::{
        controller::user::{delete_user, get_user, login, logout, register},
        error::{auth::AuthError, Error},
        model::session::user::SessionUserId,
    },
};
use serde_json::Value;

use super::*;

/// Expect 201 with the account and the new user stored in session
#[tokio::test]
async fn register_logs_user_in() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;
    let state: AppState = test.state();

    let result = register(
        State(state),
        test.session.clone(),
        Json(RegisterDto {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            password: Some("password123".to_string()),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: UserDto = read_json(resp).await;
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(
        SessionUserId::get(&test.session).await.unwrap(),
        Some(user.id)
    );

    Ok(())
}

/// Expect 400 with the duplicate email message
#[tokio::test]
async fn register_rejects_duplicate_email() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    test.user().insert_user("Ada", "ada@example.com").await?;
    let state: AppState = test.state();

    let result = register(
        State(state),
        test.session.clone(),
        Json(RegisterDto {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            password: Some("password123".to_string()),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(resp).await;
    assert_eq!(body["message"], "Email already in use.");

    Ok(())
}

/// Expect 401 for a wrong password and no user stored in session
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    test.user().insert_user("Ada", "ada@example.com").await?;
    let state: AppState = test.state();

    let result = login(
        State(state),
        test.session.clone(),
        Json(LoginDto {
            email: Some("ada@example.com".to_string()),
            password: Some("wrong-password".to_string()),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

/// Expect 200 and the user in session for valid credentials
#[tokio::test]
async fn login_establishes_session() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let user = test.user().insert_user("Ada", "ada@example.com").await?;
    let state: AppState = test.state();

    let result = login(
        State(state),
        test.session.clone(),
        Json(LoginDto {
            email: Some("ada@example.com".to_string()),
            password: Some(TEST_PASSWORD.to_string()),
        }),
    )
    .await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(
        SessionUserId::get(&test.session).await.unwrap(),
        Some(user.id)
    );

    Ok(())
}

/// Expect NotLoggedIn when calling a protected route without a session
#[tokio::test]
async fn get_user_requires_session() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;
    let state: AppState = test.state();

    let result = get_user(State(state), test.session.clone()).await;

    let err = result.err().unwrap();
    assert!(matches!(err, Error::AuthError(AuthError::NotLoggedIn)));
    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = read_json(resp).await;
    assert_eq!(body["message"], "Not authorized, please login");

    Ok(())
}

/// Expect the user to be wrapped under `user` with products and orders
#[tokio::test]
async fn get_user_returns_detail() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let user = test.user().insert_user("Ada", "ada@example.com").await?;
    test.product().insert_product(user.id, "Lamp", 20.0, 2).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let state: AppState = test.state();

    let result = get_user(State(state), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert_eq!(body["user"]["id"], user.id);
    assert_eq!(body["user"]["products"][0]["name"], "Lamp");
    assert!(body["user"].get("password_hash").is_none());

    Ok(())
}

/// Expect the session to be cleared on logout
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let user = test.user().insert_user("Ada", "ada@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let state: AppState = test.state();

    let result = logout(State(state), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert_eq!(body["message"], "Logout Successful");
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

/// Expect the account to be removed and the session cleared
#[tokio::test]
async fn delete_user_removes_account() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let user = test.user().insert_user("Ada", "ada@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let state: AppState = test.state();

    let result = delete_user(State(state.clone()), test.session.clone()).await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    // A stale session for the deleted account is rejected
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let result = get_user(State(state), test.session.clone()).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}
