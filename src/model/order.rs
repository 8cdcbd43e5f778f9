use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

string_enum! {
    pub enum OrderStatus {
        Pending => "pending",
        Paid => "paid",
        Shipped => "shipped",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
}

/// A product and the amount of it to purchase
#[derive(Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInputDto {
    /// Product ID
    pub product: i32,
    /// Defaults to 1
    pub quantity: Option<i32>,
}

/// Body of `POST /order/create-order`
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    pub products: Option<Vec<OrderLineInputDto>>,
}

/// Response of `POST /order/create-order`, used by the client to start a payment
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrderDto {
    pub order_id: i32,
    pub total_amount: f64,
}

/// Body of `PUT /order/update-order-status/{id}`
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusDto {
    pub status: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineDto {
    /// `None` once the product has been removed
    pub product_id: Option<i32>,
    /// Product name at the time of purchase
    pub name: String,
    /// Unit price at the time of purchase
    pub price: f64,
    pub seller_id: Option<i32>,
    pub quantity: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    /// `None` once the buyer has deleted their account
    pub buyer: Option<UserSummaryDto>,
    pub items: Vec<OrderLineDto>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
