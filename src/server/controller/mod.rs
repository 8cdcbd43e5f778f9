//! HTTP controller endpoints for the Luxe web API.
//!
//! Axum handlers grouped by resource. Handlers resolve the caller from the session, hand the
//! request body to the matching service and wrap the result in a JSON response. Every handler
//! carries a `utoipa` path annotation for the OpenAPI document.

pub mod expense;
pub mod notification;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;
pub mod util;
