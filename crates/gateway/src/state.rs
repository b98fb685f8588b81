//! Application state for dependency injection.

use std::sync::Arc;

use async_trait::async_trait;

use account_service_lib::infra::Database;
use account_service_lib::service::{AccountService, AuthService};
use account_service_lib::AccountServices;
use common::AppResult;

/// Connectivity check used by the health endpoint.
#[async_trait]
pub trait DatabaseCheck: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
}

#[async_trait]
impl DatabaseCheck for Database {
    async fn ping(&self) -> AppResult<()> {
        Ok(Database::ping(self).await?)
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountService>,
    pub auth: Arc<dyn AuthService>,
    pub database: Arc<dyn DatabaseCheck>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        accounts: Arc<dyn AccountService>,
        auth: Arc<dyn AuthService>,
        database: Arc<dyn DatabaseCheck>,
    ) -> Self {
        Self {
            accounts,
            auth,
            database,
        }
    }
}

impl From<AccountServices> for AppState {
    fn from(services: AccountServices) -> Self {
        Self::new(services.accounts, services.auth, Arc::new(services.database))
    }
}
