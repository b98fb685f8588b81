//! Read-side account repository.
//!
//! Writes happen only inside a unit of work, see
//! [`TxAccountRepository`](crate::infra::TxAccountRepository).

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::entities::{account, business_profile, expert_profile};
use common::{AppError, AppResult};
use domain::{normalize_email, Account, AccountProfile, AccountRole, BusinessProfile, ExpertProfile};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;

    /// Find account by email address (case-insensitive)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Find the role-specific profile of an account
    async fn find_profile(&self, account_id: Uuid, role: AccountRole)
        -> AppResult<Option<AccountProfile>>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        account::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(Account::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        account::Entity::find()
            .filter(account::Column::Email.eq(normalize_email(email)))
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(Account::try_from)
            .transpose()
    }

    async fn find_profile(
        &self,
        account_id: Uuid,
        role: AccountRole,
    ) -> AppResult<Option<AccountProfile>> {
        let profile = match role {
            AccountRole::Business => business_profile::Entity::find()
                .filter(business_profile::Column::AccountId.eq(account_id))
                .one(&self.db)
                .await?
                .map(BusinessProfile::try_from)
                .transpose()?
                .map(AccountProfile::Business),
            AccountRole::Expert => expert_profile::Entity::find()
                .filter(expert_profile::Column::AccountId.eq(account_id))
                .one(&self.db)
                .await?
                .map(ExpertProfile::try_from)
                .transpose()?
                .map(AccountProfile::Expert),
        };

        Ok(profile)
    }
}
