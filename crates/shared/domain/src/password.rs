//! Password value object - argon2id hashing and verification.
//!
//! The plain text never leaves this module: callers get a PHC-formatted hash
//! string for storage and a boolean for verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Hash of a throwaway secret, verified against when an account has no
/// usable credential so that both paths cost one argon2 run.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| Password::hash(&uuid::Uuid::new_v4().to_string()).ok());

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns a password error if the plain text is shorter than
    /// [`MIN_PASSWORD_LENGTH`] characters, or an internal error if hashing fails.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::password(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// Malformed hashes never verify.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    /// Burn one verification against a dummy hash. Always returns `false`.
    pub fn verify_dummy(plain_text: &str) -> bool {
        if let Some(hash) = DUMMY_HASH.as_deref() {
            let _ = Self::verify_hash(plain_text, hash);
        }
        false
    }

    /// Build the dummy hash now instead of on the first unknown-account
    /// sign-in. Returns `false` if it could not be built.
    pub fn warm_up() -> bool {
        Lazy::force(&DUMMY_HASH).is_some()
    }

    fn hash(plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| DomainError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    /// Argon2id with the crate's default (OWASP-recommended) parameters.
    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}
