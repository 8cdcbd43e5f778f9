//! Client for the Paystack-compatible payment gateway.
//!
//! Only the two calls the checkout flow needs are implemented: creating a transaction for an
//! order and verifying it once the buyer returns from the gateway's payment page. Both use
//! bearer authentication with the secret key and unwrap the gateway's `{status, message, data}`
//! envelope.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{model::payment::PaymentInitializationDto, server::error::payment::PaymentError};

/// Metadata attached to a transaction so verification can find the order again
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TransactionMetadata {
    pub order_id: i32,
    pub buyer: i32,
}

#[derive(Serialize)]
struct InitializeRequest<'a> {
    email: &'a str,
    /// Amount in the currency's minor unit
    amount: i64,
    metadata: &'a TransactionMetadata,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: String,
}

/// Transaction state reported by the verify endpoint
#[derive(Clone, Debug, Deserialize)]
pub struct VerifiedTransaction {
    pub status: String,
    pub reference: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl VerifiedTransaction {
    pub fn is_successful(&self) -> bool {
        self.status == "success"
    }

    /// Order ID stored in the metadata at initialization, accepts numbers and numeric strings
    pub fn order_id(&self) -> Option<i32> {
        let value = self.metadata.get("order_id")?;

        match value {
            serde_json::Value::Number(number) => {
                number.as_i64().and_then(|id| i32::try_from(id).ok())
            }
            serde_json::Value::String(id) => id.parse().ok(),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct PaystackClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl PaystackClient {
    /// Creates a client for the gateway at `base_url`
    pub fn new(base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key: secret_key.into(),
        }
    }

    /// Creates a transaction and returns the checkout page the buyer is sent to
    ///
    /// # Arguments
    /// - `email` - Buyer email the gateway sends the receipt to
    /// - `amount` - Amount in the currency's minor unit
    /// - `metadata` - Order reference echoed back on verification
    pub async fn initialize_transaction(
        &self,
        email: &str,
        amount: i64,
        metadata: &TransactionMetadata,
    ) -> Result<PaymentInitializationDto, PaymentError> {
        let response = self
            .http
            .post(self.endpoint(&["transaction", "initialize"])?)
            .bearer_auth(&self.secret_key)
            .json(&InitializeRequest {
                email,
                amount,
                metadata,
            })
            .send()
            .await?;

        Self::read_data(response).await
    }

    /// Fetches the current state of the transaction identified by `reference`
    ///
    /// The reference is sent as a single percent-encoded path segment, so it can never address
    /// another gateway endpoint.
    pub async fn verify_transaction(
        &self,
        reference: &str,
    ) -> Result<VerifiedTransaction, PaymentError> {
        let response = self
            .http
            .get(self.endpoint(&["transaction", "verify", reference])?)
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        Self::read_data(response).await
    }

    /// Appends `segments` to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, PaymentError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| PaymentError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| PaymentError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn read_data<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PaymentError> {
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorEnvelope>().await {
                Ok(body) => body.message,
                Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
            };

            return Err(PaymentError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        let envelope = response.json::<Envelope<T>>().await?;

        Ok(envelope.data)
    }
}
