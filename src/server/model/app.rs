use sea_orm::DatabaseConnection;

use crate::server::gateway::PaystackClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub paystack: PaystackClient,
}

/// Builds state from a database connection, gateway base URL and gateway secret key
impl From<(DatabaseConnection, String, String)> for AppState {
    fn from((db, paystack_url, paystack_secret_key): (DatabaseConnection, String, String)) -> Self {
        Self {
            db,
            paystack: PaystackClient::new(paystack_url, paystack_secret_key),
        }
    }
}
