//! Unified error handling for the HTTP boundary.
//!
//! Provides a single error type that services return and that the gateway
//! converts into JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, FieldErrors};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    /// Field-level schema failures, reported per field
    #[error("Validation failed: {0}")]
    InvalidFields(FieldErrors),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "jwt")]
    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) | AppError::InvalidFields(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "UNAUTHORIZED",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::InvalidFields(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::InvalidFields(fields) => fields
                .first_message()
                .unwrap_or("Validation failed")
                .to_string(),
            AppError::Conflict(msg) => {
                if msg.ends_with("already exists") {
                    msg.clone()
                } else {
                    format!("{} already exists", msg)
                }
            }

            // Hide details for internal/security errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => {
                tracing::debug!("JWT error: {:?}", e);
                "Invalid or expired token".to_string()
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    /// Field-level errors, if this is a schema failure
    pub fn fields(&self) -> Option<&FieldErrors> {
        match self {
            AppError::InvalidFields(fields) => Some(fields),
            _ => None,
        }
    }

    /// Build the JSON body sent to clients
    pub fn to_body(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
                fields: self.fields().cloned(),
            },
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_body())).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(fields) => AppError::InvalidFields(fields),
            DomainError::Password(msg) => {
                let mut fields = FieldErrors::new();
                fields.add("password", msg);
                AppError::InvalidFields(fields)
            }
            DomainError::NotFound(_) => AppError::NotFound,
            DomainError::Conflict(msg) => AppError::Conflict(msg),
            DomainError::InvalidCredentials => AppError::InvalidCredentials,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(fields: FieldErrors) -> Self {
        AppError::InvalidFields(fields)
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
