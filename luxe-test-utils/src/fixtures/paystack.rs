//! Mock payment gateway endpoints.
//!
//! Endpoints are registered on the setup's mockito server, which the application state built by
//! [`TestSetup::state`](crate::TestSetup::state) points its gateway client at.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{constant::TEST_PAYSTACK_SECRET, TestSetup};

impl TestSetup {
    pub fn paystack<'a>(&'a mut self) -> PaystackFixtures<'a> {
        PaystackFixtures { setup: self }
    }
}

pub struct PaystackFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> PaystackFixtures<'a> {
    /// Create a mock transaction initialization endpoint.
    ///
    /// The mock only matches requests carrying the test secret as bearer token and the given
    /// amount in minor units, and returns a checkout page for `reference`.
    ///
    /// # Arguments
    /// - `amount` - Expected amount in minor units
    /// - `reference` - Transaction reference to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_initialize_endpoint(
        &mut self,
        amount: i64,
        reference: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "status": true,
            "message": "Authorization URL created",
            "data": {
                "authorization_url": format!("https://checkout.paystack.com/{}", reference),
                "access_code": format!("access_{}", reference),
                "reference": reference
            }
        });

        self.setup
            .server
            .mock("POST", "/transaction/initialize")
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_PAYSTACK_SECRET).as_str(),
            )
            .match_body(Matcher::PartialJson(json!({ "amount": amount })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock transaction verification endpoint.
    ///
    /// # Arguments
    /// - `reference` - Transaction reference in the request path
    /// - `status` - Transaction status to report, `"success"` for a completed payment
    /// - `order_id` - Order ID placed in the transaction metadata, `None` omits it
    /// - `amount` - Charged amount in minor units
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_verify_endpoint(
        &mut self,
        reference: &str,
        status: &str,
        order_id: Option<i32>,
        amount: i64,
        expected_requests: usize,
    ) -> Mock {
        let metadata = match order_id {
            Some(order_id) => json!({ "order_id": order_id }),
            None => json!({}),
        };
        let body = json!({
            "status": true,
            "message": "Verification successful",
            "data": {
                "status": status,
                "reference": reference,
                "amount": amount,
                "metadata": metadata
            }
        });

        self.setup
            .server
            .mock("GET", format!("/transaction/verify/{}", reference).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create an endpoint that fails every request with the given status code
    pub fn create_failing_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "status": false, "message": "Gateway unavailable" }).to_string())
            .expect(expected_requests)
            .create()
    }
}
