//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::validation::FieldErrors;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// One or more fields failed their schema
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Password-related errors
    #[error("Password error: {0}")]
    Password(String),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Entity already exists (conflict)
    #[error("{0} already exists")]
    Conflict(String),

    /// Invalid credentials provided
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }

    /// Create a conflict error
    pub fn conflict(entity: impl Into<String>) -> Self {
        DomainError::Conflict(entity.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

impl From<FieldErrors> for DomainError {
    fn from(errors: FieldErrors) -> Self {
        DomainError::Validation(errors)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
