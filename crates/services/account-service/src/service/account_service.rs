//! Account service - registration of businesses and experts.
//!
//! Every registration re-validates the full payload, hashes the password on
//! the blocking pool and writes the account with its profile in one
//! transaction.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    normalize_email, Account, AccountDetails, AccountResponse, AccountRole, AccountWithProfile,
    BusinessProfile, BusinessRegistration, ExpertProfile, ExpertRegistration, Password, Schema,
};

use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create a business account together with its profile
    async fn register_business(&self, payload: BusinessRegistration) -> AppResult<AccountResponse>;

    /// Create an expert account together with its profile
    async fn register_expert(&self, payload: ExpertRegistration) -> AppResult<AccountResponse>;

    /// Get an account and its role-specific profile
    async fn get_account(&self, id: Uuid) -> AppResult<AccountWithProfile>;
}

/// Concrete implementation of AccountService using Unit of Work.
pub struct AccountManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AccountManager<U> {
    /// Create new account service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Check the email is free and hash the password.
    async fn prepare_account(&self, details: &AccountDetails, role: AccountRole) -> AppResult<Account> {
        let email = normalize_email(&details.email);
        if self.uow.accounts().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Account with this email"));
        }

        let plain = details.password.clone();
        let password = tokio::task::spawn_blocking(move || Password::new(&plain))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??;

        Ok(Account::new(&email, Some(password.into_string()), role))
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> AccountService for AccountManager<U> {
    async fn register_business(&self, payload: BusinessRegistration) -> AppResult<AccountResponse> {
        payload.check()?;

        let account = self.prepare_account(&payload.account, AccountRole::Business).await?;
        let profile = BusinessProfile::from_registration(account.id, &payload);

        let account = crate::with_transaction!(self.uow, |ctx| {
            let account = ctx.accounts().insert_account(account).await?;
            ctx.accounts().insert_business_profile(&profile).await?;
            Ok::<_, AppError>(account)
        })?;

        tracing::info!(account_id = %account.id, role = %account.role, "Account registered");
        Ok(AccountResponse::from(account))
    }

    async fn register_expert(&self, payload: ExpertRegistration) -> AppResult<AccountResponse> {
        payload.check()?;

        let account = self.prepare_account(&payload.account, AccountRole::Expert).await?;
        let profile = ExpertProfile::from_registration(account.id, &payload);

        let account = crate::with_transaction!(self.uow, |ctx| {
            let account = ctx.accounts().insert_account(account).await?;
            ctx.accounts().insert_expert_profile(&profile).await?;
            Ok::<_, AppError>(account)
        })?;

        tracing::info!(account_id = %account.id, role = %account.role, "Account registered");
        Ok(AccountResponse::from(account))
    }

    async fn get_account(&self, id: Uuid) -> AppResult<AccountWithProfile> {
        let account = self.uow.accounts().find_by_id(id).await?.ok_or_not_found()?;
        let profile = self
            .uow
            .accounts()
            .find_profile(account.id, account.role)
            .await?;

        Ok(AccountWithProfile {
            account: AccountResponse::from(account),
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{TransactionContext, TxFuture};
    use crate::repository::{AccountRepository, MockAccountRepository};
    use domain::{
        AccountProfile, CompanyDetails, CompanySize, FinancialExpertiseArea, Requirements,
    };
    use mockall::predicate::eq;

    /// Test double for UnitOfWork; transactions are exercised against SQLite
    /// in the integration tests instead.
    struct TestUnitOfWork {
        account_repo: Arc<MockAccountRepository>,
    }

    impl TestUnitOfWork {
        fn new(account_repo: MockAccountRepository) -> Arc<Self> {
            Arc::new(Self {
                account_repo: Arc::new(account_repo),
            })
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn accounts(&self) -> Arc<dyn AccountRepository> {
            self.account_repo.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
            T: Send,
        {
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }

    fn business_payload(email: &str) -> BusinessRegistration {
        BusinessRegistration {
            account: AccountDetails::new(email, "longenough1"),
            company: CompanyDetails {
                company_name: "Acme".into(),
                description: "We are a growing company looking for expert financial advice.".into(),
                industry_type: "Finance".into(),
                company_size: CompanySize::Small,
            },
            requirements: Requirements {
                location: "NYC".into(),
                services_needed: vec![FinancialExpertiseArea::TaxPlanning],
                budget_min: 1000.0,
                budget_max: 5000.0,
                timeline: "3 months".into(),
            },
        }
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_repository() {
        let service = AccountManager::new(TestUnitOfWork::new(MockAccountRepository::new()));

        let mut payload = business_payload("a@b.com");
        payload.requirements.budget_min = 5000.0;
        payload.requirements.budget_max = 1000.0;

        let err = service.register_business(payload).await.unwrap_err();
        let fields = err.fields().expect("field errors");
        assert!(fields.contains("budgetMax"));
    }

    #[tokio::test]
    async fn test_existing_email_is_conflict() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_email()
            .with(eq("a@b.com"))
            .times(1)
            .returning(|email| Ok(Some(Account::new(email, None, AccountRole::Expert))));

        let service = AccountManager::new(TestUnitOfWork::new(repo));
        let err = service
            .register_business(business_payload("A@B.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.user_message(), "Account with this email already exists");
    }

    #[tokio::test]
    async fn test_get_account_not_found() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = AccountManager::new(TestUnitOfWork::new(repo));
        let result = service.get_account(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_account_includes_profile() {
        let account = Account::new("a@b.com", Some("hash".into()), AccountRole::Business);
        let account_id = account.id;
        let profile = BusinessProfile::from_registration(account_id, &business_payload("a@b.com"));

        let mut repo = MockAccountRepository::new();
        let found = account.clone();
        repo.expect_find_by_id()
            .with(eq(account_id))
            .returning(move |_| Ok(Some(found.clone())));
        let stored = profile.clone();
        repo.expect_find_profile()
            .with(eq(account_id), eq(AccountRole::Business))
            .returning(move |_, _| Ok(Some(AccountProfile::Business(stored.clone()))));

        let service = AccountManager::new(TestUnitOfWork::new(repo));
        let result = service.get_account(account_id).await.unwrap();

        assert_eq!(result.account.email, "a@b.com");
        assert_eq!(result.profile, Some(AccountProfile::Business(profile)));
    }
}
