use crate::server::{
    error::{auth::AuthError, Error},
    util::placeholder::is_placeholder_image,
};

use super::*;

fn register_dto(password: &str) -> RegisterDto {
    RegisterDto {
        name: Some("Ada Lovelace".to_string()),
        email: Some("ada@example.com".to_string()),
        password: Some(password.to_string()),
    }
}

/// Expect the account to be created with a hashed password and placeholder avatar
#[tokio::test]
async fn registers_user() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service.register(register_dto("password123")).await;

    let user = result.unwrap();
    assert_eq!(user.name, "Ada Lovelace");
    assert!(is_placeholder_image(&user.image));
    assert!(user.image.contains("?text=AL&"));
    let stored = UserRepository::new(&test.state.db)
        .get(user.id)
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "password123");
    assert!(bcrypt::verify("password123", &stored.password_hash)?);

    Ok(())
}

/// Expect BadRequest when a field is missing
#[tokio::test]
async fn fails_for_missing_field() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service
        .register(RegisterDto {
            email: None,
            ..register_dto("password123")
        })
        .await;

    assert!(matches!(result, Err(Error::BadRequest(ref m)) if m == "All fields are required"));

    Ok(())
}

/// Expect BadRequest for passwords shorter than 8 or longer than 20 characters
#[tokio::test]
async fn fails_for_password_length() -> Result<(), TestError> {
    let test = test_setup_with_luxe_tables!()?;

    let user_service = UserService::new(&test.state.db);
    for password in ["short", "this-password-is-far-too-long"] {
        let result = user_service.register(register_dto(password)).await;

        assert!(matches!(
            result,
            Err(Error::BadRequest(ref m)) if m == "Password must be between 8 and 20 characters"
        ));
    }

    Ok(())
}

/// Expect EmailInUse when the email is already registered
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    test.user().insert_user("Ada", "ada@example.com").await?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service.register(register_dto("password123")).await;

    assert!(matches!(result, Err(Error::AuthError(AuthError::EmailInUse))));

    Ok(())
}
