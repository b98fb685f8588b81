//! Authentication service - credential checks and session tokens.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use common::{AppError, AppResult, JwtConfig};
use domain::{Account, Password, SessionClaims, SessionResponse, TOKEN_TYPE_BEARER};

use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check an email/password pair and issue a session.
    ///
    /// Every failure is the same `InvalidCredentials` error.
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<SessionResponse>;

    /// Verify a session token and extract its claims
    fn verify_session(&self, token: &str) -> AppResult<SessionClaims>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: JwtConfig,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance
    pub fn new(uow: Arc<U>, config: JwtConfig) -> Self {
        Self { uow, config }
    }

    fn issue_session(&self, account: &Account) -> AppResult<SessionResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.config.max_age_seconds());

        let claims = SessionClaims {
            sub: account.id,
            email: account.email.clone(),
            role: account.role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )?;

        Ok(SessionResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.config.max_age_seconds(),
            expires_at,
            account_id: account.id,
        })
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> AuthService for Authenticator<U> {
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<SessionResponse> {
        let account = self.uow.accounts().find_by_email(email).await?;

        // Missing account and missing credential both cost one argon2 run
        let stored_hash = account.as_ref().and_then(|a| a.password_hash.clone());
        let plain = password.to_string();
        let verified = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => Password::from_hash(hash).verify(&plain),
            None => Password::verify_dummy(&plain),
        })
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))?;

        match account {
            Some(account) if verified => {
                tracing::info!(account_id = %account.id, "Session issued");
                self.issue_session(&account)
            }
            _ => Err(AppError::InvalidCredentials),
        }
    }

    fn verify_session(&self, token: &str) -> AppResult<SessionClaims> {
        let token_data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }
}
