use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::product::ProductDto;

/// Body of `PUT /user/toggle-cart/{product_id}`
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCartDto {
    /// Defaults to 1
    pub quantity: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub id: i32,
    pub product: ProductDto,
    pub quantity: i32,
}

/// Response of `PUT /user/toggle-cart/{product_id}`
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartResponseDto {
    pub message: String,
    pub cart: Vec<CartItemDto>,
}
