//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! It is the single shared contract between the registration client, the
//! gateway and the account service.

pub mod account;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod password;
pub mod profile;
pub mod registration;
pub mod session;
pub mod validation;

pub use account::{normalize_email, Account, AccountResponse, AccountRole};
pub use catalog::{
    Catalog, CatalogOption, CompanySize, FinancialCertification, FinancialExpertiseArea,
    UnknownVariant,
};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use profile::{AccountProfile, AccountWithProfile, BusinessProfile, ExpertProfile};
pub use registration::{
    AccountDetails, BusinessRegistration, CompanyDetails, ExpertRegistration, PersonalInfo,
    ProfessionalInfo, ProfileDetails, RegistrationPayload, Requirements,
};
pub use session::{Credentials, SessionClaims, SessionResponse};
pub use validation::{is_http_url, FieldErrors, Schema};
