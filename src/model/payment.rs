use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::order::OrderDto;

/// Body of `POST /payment/initiate`
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitiatePaymentDto {
    #[serde(alias = "order_id")]
    pub order_id: Option<i32>,
    /// Email address the gateway sends the receipt to
    pub email: Option<String>,
}

/// Checkout session created by the payment gateway, passed through in the gateway's spelling
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentInitializationDto {
    /// Page the client redirects the buyer to
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

/// Response of `GET /payment/verify/{reference}`
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentVerifiedDto {
    pub message: String,
    pub order: OrderDto,
}
