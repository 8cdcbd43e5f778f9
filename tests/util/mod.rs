//! Helpers shared by the integration tests.

use axum::{body::Body, http::Response};
use serde::de::DeserializeOwned;

/// Reads a response body as JSON
pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
