//! Service layer - registration and authentication use cases.

mod account_service;
mod auth_service;

pub use account_service::{AccountManager, AccountService};
pub use auth_service::{AuthService, Authenticator};

#[cfg(any(test, feature = "test-utils"))]
pub use account_service::MockAccountService;
#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
