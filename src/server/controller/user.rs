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
        cart::{CartItemDto, CartResponseDto, ToggleCartDto},
        user::{
            LoginDto, ProfileImageDto, ProfileImageResponseDto, RegisterDto, UpdateUserDto,
            UpdatedUserDto, UserDto, UserResponseDto,
        },
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::user::{cart::CartService, UserService},
    },
};

pub static USER_TAG: &str = "user";

/// Creates an account and logs it in
#[utoipa::path(
    post,
    path = "/user/register",
    tag = USER_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and logged in", body = UserDto),
        (status = 400, description = "Missing field, invalid password length or email in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).register(dto).await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Logs in with email and password
#[utoipa::path(
    post,
    path = "/user/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 404, description = "No account for the email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).login(dto).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    post,
    path = "/user/logout",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    session.clear().await;

    Ok((StatusCode::OK, Json(MessageDto::new("Logout Successful"))))
}

/// Gets the logged in user with the products they list and the orders they placed
#[utoipa::path(
    get,
    path = "/user/get-user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let Some(detail) = UserService::new(&state.db).get_user_detail(user.id).await? else {
        return Err(Error::NotFound("User not found".to_string()));
    };

    Ok((StatusCode::OK, Json(UserResponseDto { user: detail })))
}

/// Renames the logged in user
#[utoipa::path(
    put,
    path = "/user/update-user",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UpdatedUserDto),
        (status = 400, description = "Name missing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let updated_user = UserService::new(&state.db).update_user(user.id, dto).await?;

    Ok((StatusCode::OK, Json(UpdatedUserDto { updated_user })))
}

/// Deletes the logged in user's account and logs them out
#[utoipa::path(
    delete,
    path = "/user/delete-user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    if !UserService::new(&state.db).delete_user(user.id).await? {
        return Err(Error::NotFound("User not found".to_string()));
    }

    session.clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "Account and associated data deleted successfully",
        )),
    ))
}

/// Sets the profile image to an already hosted image URL
#[utoipa::path(
    put,
    path = "/user/upload-profile-image",
    tag = USER_TAG,
    request_body = ProfileImageDto,
    responses(
        (status = 200, description = "Profile image updated", body = ProfileImageResponseDto),
        (status = 400, description = "No image given", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_profile_image(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<ProfileImageDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let image = UserService::new(&state.db)
        .upload_profile_image(user.id, dto.image)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ProfileImageResponseDto {
            message: "Profile image updated successfully".to_string(),
            image,
        }),
    ))
}

/// Resets the profile image to a generated placeholder showing the user's initials
#[utoipa::path(
    delete,
    path = "/user/delete-profile-image",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile image reset", body = ProfileImageResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_profile_image(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let image = UserService::new(&state.db)
        .delete_profile_image(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ProfileImageResponseDto {
            message: "Profile image deleted and reset to initials".to_string(),
            image,
        }),
    ))
}

/// Adds a product to the cart, or removes it if it is already there
#[utoipa::path(
    put,
    path = "/user/toggle-cart/{product_id}",
    tag = USER_TAG,
    params(("product_id" = i32, Path, description = "Product to toggle")),
    request_body(content = ToggleCartDto, description = "Quantity to add, defaults to 1"),
    responses(
        (status = 200, description = "Cart updated", body = CartResponseDto),
        (status = 400, description = "Invalid quantity or insufficient stock", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_cart(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
    dto: Option<Json<ToggleCartDto>>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let quantity = dto.and_then(|Json(dto)| dto.quantity);
    let response = CartService::new(&state.db)
        .toggle(user.id, product_id, quantity)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Gets the logged in user's cart
#[utoipa::path(
    get,
    path = "/user/get-cart",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Cart contents in the order they were added", body = Vec<CartItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let cart = CartService::new(&state.db).get(user.id).await?;

    Ok((StatusCode::OK, Json(cart)))
}
