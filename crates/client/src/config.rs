//! Client configuration.

use std::env;
use std::time::Duration;

/// Where the gateway lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct RegistrationClientConfig {
    /// Base URL of the gateway, without a trailing slash
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl RegistrationClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("REGISTRATION_API_URL").unwrap_or(defaults.api_url),
            timeout_secs: env::var("REGISTRATION_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for RegistrationClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
        }
    }
}
