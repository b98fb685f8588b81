//! Login request and session types shared by the gateway and its clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{FieldErrors, Schema};

/// Email and password supplied at sign-in
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Credentials {
    #[cfg_attr(feature = "openapi", schema(example = "jane@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "longenough1"))]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// No field rules: any bad pair is reported as invalid credentials, never as
/// a field error.
impl Schema for Credentials {
    fn check(&self) -> Result<(), FieldErrors> {
        Ok(())
    }
}

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionClaims {
    /// Account id
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    /// Expiry, seconds since the epoch
    pub exp: i64,
    /// Issued at, seconds since the epoch
    pub iat: i64,
}

/// Session issued after successful authentication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionResponse {
    /// Signed JWT
    #[cfg_attr(feature = "openapi", schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."))]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[cfg_attr(feature = "openapi", schema(example = "Bearer"))]
    pub token_type: String,
    /// Lifetime in seconds
    #[cfg_attr(feature = "openapi", schema(example = 2592000))]
    pub expires_in: i64,
    pub expires_at: DateTime<Utc>,
    pub account_id: Uuid,
}
