use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{order::OrderDto, product::ProductDto};

/// Body of `POST /user/register`
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /user/login`
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `PUT /user/update-user`
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub name: Option<String>,
}

/// Body of `PUT /user/upload-profile-image`
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImageDto {
    /// URL of the already hosted image
    pub image: Option<String>,
}

/// Public account information, never includes the password hash
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub image: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::luxe_user::Model> for UserDto {
    fn from(user: entity::luxe_user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
            created_at: user.created_at,
        }
    }
}

/// Name reference to another user, used for sellers and buyers
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
}

impl From<&entity::luxe_user::Model> for UserSummaryDto {
    fn from(user: &entity::luxe_user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

/// Account information together with the products listed and orders placed by the user
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub products: Vec<ProductDto>,
    pub orders: Vec<OrderDto>,
}

/// Response of `GET /user/get-user`
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub user: UserDetailDto,
}

/// Response of `PUT /user/update-user`
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedUserDto {
    pub updated_user: UserDto,
}

/// Response of the profile image endpoints
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImageResponseDto {
    pub message: String,
    pub image: String,
}
