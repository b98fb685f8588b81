//! Gateway configuration.

use std::env;

use account_service_lib::config::AccountServiceConfig;
use common::{env_or, AppResult};

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Embedded account service settings
    pub accounts: AccountServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Fails when the account service settings are invalid.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_or("GATEWAY_PORT", 3000),
            accounts: AccountServiceConfig::from_env()?,
        })
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            accounts: AccountServiceConfig::default(),
        }
    }
}
