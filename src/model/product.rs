use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{user::UserSummaryDto, InvalidVariant};

string_enum! {
    pub enum ProductCategory {
        Electronics => "Electronics",
        Clothing => "Clothing",
        Books => "Books",
        Beauty => "Beauty",
        Home => "Home",
        Toys => "Toys",
        Other => "Other",
    }
}

/// Body of `POST /product/create-product`
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// URL of the already hosted product image
    pub image: Option<String>,
}

/// Body of `PUT /product/update-product/{id}`, absent fields keep their stored value
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub seller: UserSummaryDto,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub category: ProductCategory,
    pub image: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ProductDto {
    pub fn new(
        product: entity::luxe_product::Model,
        seller: &entity::luxe_user::Model,
    ) -> Result<Self, InvalidVariant> {
        Ok(Self {
            id: product.id,
            seller: UserSummaryDto::from(seller),
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            description: product.description,
            category: product.category.parse()?,
            image: product.image,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}
