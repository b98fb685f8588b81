//! Account (identity) domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ROLE_BUSINESS, ROLE_EXPERT};
use crate::error::DomainError;

/// Side of the marketplace an account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AccountRole {
    Business,
    Expert,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Business => ROLE_BUSINESS,
            AccountRole::Expert => ROLE_EXPERT,
        }
    }
}

impl std::str::FromStr for AccountRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_BUSINESS => Ok(AccountRole::Business),
            ROLE_EXPERT => Ok(AccountRole::Expert),
            other => Err(DomainError::internal(format!("Unknown account role: {}", other))),
        }
    }
}

impl From<AccountRole> for String {
    fn from(role: AccountRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trim and lowercase an email address; accounts are unique on this form.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Account domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    /// `None` for accounts created by an external identity provider
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account; the email is stored normalized.
    pub fn new(email: &str, password_hash: Option<String>, role: AccountRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the account can sign in with a password
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// Public fields of an account (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccountResponse {
    /// Unique account identifier
    pub id: Uuid,
    /// Normalized email address
    pub email: String,
    pub role: AccountRole,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            role: account.role,
            created_at: account.created_at,
        }
    }
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            role: account.role,
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!("business".parse::<AccountRole>().unwrap(), AccountRole::Business);
        assert_eq!(AccountRole::Expert.to_string(), "expert");
        assert!("admin".parse::<AccountRole>().is_err());
    }

    #[test]
    fn test_new_account_normalizes_email() {
        let account = Account::new("  Jane@Example.COM ", Some("hash".into()), AccountRole::Expert);
        assert_eq!(account.email, "jane@example.com");
        assert_eq!(account.created_at, account.updated_at);
        assert!(account.has_password());
    }

    #[test]
    fn test_serialization_skips_password_hash() {
        let account = Account::new("a@b.co", Some("secret-hash".into()), AccountRole::Business);
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_hash").is_none());

        let response = serde_json::to_value(AccountResponse::from(&account)).unwrap();
        assert_eq!(response["role"], "business");
        assert!(response.get("createdAt").is_some());
        assert!(response.get("passwordHash").is_none());
    }
}
