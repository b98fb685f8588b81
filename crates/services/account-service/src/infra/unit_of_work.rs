//! Unit of Work pattern implementation.
//!
//! An account and its profile are written through one [`TransactionContext`],
//! so either both rows are committed or neither is.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, IsolationLevel,
    SqlErr, TransactionTrait,
};

use common::{AppError, AppResult};
use domain::{Account, BusinessProfile, ExpertProfile};

use crate::repository::entities::{account, business_profile, expert_profile};
use crate::repository::{AccountRepository, AccountStore};

/// Boxed future returned by a transactional closure.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get account repository
    fn accounts(&self) -> Arc<dyn AccountRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error, with
    /// ReadCommitted isolation.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get account repository for this transaction
    pub fn accounts(&self) -> TxAccountRepository<'_> {
        TxAccountRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    account_repo: Arc<AccountStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let account_repo = Arc::new(AccountStore::new(db.clone()));
        Self { db, account_repo }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn accounts(&self) -> Arc<dyn AccountRepository> {
        self.account_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware account repository.
///
/// Executes all operations within the borrowed transaction.
pub struct TxAccountRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxAccountRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Insert a new account.
    ///
    /// # Errors
    /// `Conflict` when the email is already taken.
    pub async fn insert_account(&self, new_account: Account) -> AppResult<Account> {
        let model = account::ActiveModel::from(&new_account)
            .insert(self.txn)
            .await
            .map_err(map_unique_violation)?;

        Account::try_from(model)
    }

    /// Insert the profile of a business account
    pub async fn insert_business_profile(&self, profile: &BusinessProfile) -> AppResult<()> {
        business_profile::active_model(profile)?
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    /// Insert the profile of an expert account
    pub async fn insert_expert_profile(&self, profile: &ExpertProfile) -> AppResult<()> {
        expert_profile::active_model(profile)?
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}

/// A violated email index means another registration won the race.
fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violation: {}", detail);
            AppError::conflict("Account with this email")
        }
        _ => AppError::from(err),
    }
}

/// Simpler API for executing transactional operations.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
