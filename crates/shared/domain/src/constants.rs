//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Account Roles
// =============================================================================

/// Role of accounts that look for financial expertise
pub const ROLE_BUSINESS: &str = "business";

/// Role of accounts that offer financial expertise
pub const ROLE_EXPERT: &str = "expert";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Languages offered by the expert registration form
pub const SUGGESTED_LANGUAGES: &[&str] = &[
    "English", "Spanish", "French", "German", "Mandarin", "Japanese", "Arabic",
];

// =============================================================================
// Authentication
// =============================================================================

/// Default maximum session lifetime in days
pub const DEFAULT_SESSION_MAX_AGE_DAYS: i64 = 30;

/// Upper bound for a configured session lifetime in days
pub const MAX_SESSION_MAX_AGE_DAYS: i64 = 30;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per day (for session expiration calculation)
pub const SECONDS_PER_DAY: i64 = 86_400;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Registration flow
// =============================================================================

/// Where a client goes after a successful registration
pub const POST_REGISTRATION_REDIRECT: &str = "/login";

/// Message shown when a submission fails for an unrecognised reason
pub const GENERIC_SUBMISSION_ERROR: &str = "An unexpected error occurred. Please try again.";
