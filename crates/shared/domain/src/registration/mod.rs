//! Registration contract shared by the client wizard and the account service.
//!
//! Each wizard step has its own struct and [`Schema`](crate::validation::Schema);
//! a full payload is the flattened union of its steps, so the JSON a client
//! assembles step by step is exactly the JSON the server validates.

mod account;
mod business;
mod expert;

pub use account::AccountDetails;
pub use business::{BusinessRegistration, CompanyDetails, Requirements};
pub use expert::{ExpertRegistration, PersonalInfo, ProfessionalInfo, ProfileDetails};

use serde::{Deserialize, Serialize};

use crate::account::AccountRole;
use crate::validation::{FieldErrors, Schema};

/// A complete registration for either side of the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RegistrationPayload {
    Business(BusinessRegistration),
    Expert(ExpertRegistration),
}

impl RegistrationPayload {
    pub fn role(&self) -> AccountRole {
        match self {
            RegistrationPayload::Business(_) => AccountRole::Business,
            RegistrationPayload::Expert(_) => AccountRole::Expert,
        }
    }

    pub fn account(&self) -> &AccountDetails {
        match self {
            RegistrationPayload::Business(p) => &p.account,
            RegistrationPayload::Expert(p) => &p.account,
        }
    }
}

impl Schema for RegistrationPayload {
    fn check(&self) -> Result<(), FieldErrors> {
        match self {
            RegistrationPayload::Business(p) => p.check(),
            RegistrationPayload::Expert(p) => p.check(),
        }
    }
}

impl From<BusinessRegistration> for RegistrationPayload {
    fn from(payload: BusinessRegistration) -> Self {
        RegistrationPayload::Business(payload)
    }
}

impl From<ExpertRegistration> for RegistrationPayload {
    fn from(payload: ExpertRegistration) -> Self {
        RegistrationPayload::Expert(payload)
    }
}
