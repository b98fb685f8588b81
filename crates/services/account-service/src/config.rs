//! Account service configuration.

use common::{AppResult, DatabaseConfig, JwtConfig};

/// Account service configuration.
#[derive(Debug, Clone, Default)]
pub struct AccountServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Session signing settings
    pub jwt: JwtConfig,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Fails when `JWT_SECRET` is missing or too short.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env()?,
        })
    }
}
