//! Environment driven server configuration.

use crate::server::error::config::ConfigError;

pub static DEFAULT_PAYSTACK_URL: &str = "https://api.paystack.co";
pub static DEFAULT_CLIENT_URL: &str = "https://trackfi-beta.vercel.app";
pub static DEFAULT_PORT: u16 = 2000;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub paystack_secret_key: String,
    pub paystack_url: String,
    pub client_url: String,
    pub port: u16,
}

impl Config {
    /// Reads the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source
    ///
    /// # Arguments
    /// - `lookup` - Returns the value for a variable name, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is not a valid port number
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            paystack_secret_key: required("PAYSTACK_SECRET_KEY")?,
            paystack_url: lookup("PAYSTACK_URL")
                .unwrap_or_else(|| DEFAULT_PAYSTACK_URL.to_string()),
            client_url: lookup("CLIENT_URL").unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string()),
            port,
        })
    }
}
