//! Account Service Library
//!
//! Registration of business and expert accounts, password authentication and
//! session tokens, backed by SeaORM. The gateway embeds it in-process.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::{info, warn};

use domain::Password;

use crate::config::AccountServiceConfig;
use crate::infra::{Database, Persistence};
use crate::service::{AccountManager, AccountService, AuthService, Authenticator};

/// Services built on one database connection.
#[derive(Clone)]
pub struct AccountServices {
    pub database: Database,
    pub accounts: Arc<dyn AccountService>,
    pub auth: Arc<dyn AuthService>,
}

impl AccountServices {
    /// Connect, apply pending migrations and wire the services.
    pub async fn connect(config: &AccountServiceConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let database = Database::connect(&config.database).await?;
        Ok(Self::from_database(database, config))
    }

    /// Wire the services on an existing, migrated database.
    pub fn from_database(database: Database, config: &AccountServiceConfig) -> Self {
        // Unknown-email sign-ins must not pay for building the dummy hash
        if !Password::warm_up() {
            warn!("Could not prepare the dummy password hash");
        }

        let uow = Arc::new(Persistence::new(database.get_connection()));
        Self {
            accounts: Arc::new(AccountManager::new(uow.clone())),
            auth: Arc::new(Authenticator::new(uow, config.jwt.clone())),
            database,
        }
    }
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = common::DatabaseConfig::from_env();
    let db = Database::connect_without_migrations(&config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
