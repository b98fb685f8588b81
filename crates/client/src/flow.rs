//! Registration flows: which steps each role goes through, in order.

use domain::{AccountRole, BusinessRegistration, ExpertRegistration, RegistrationPayload};

use crate::draft::RegistrationDraft;
use crate::error::WizardError;
use crate::steps::StepKind;

const BUSINESS_STEPS: &[StepKind] = &[StepKind::Account, StepKind::Company, StepKind::Requirements];

const EXPERT_STEPS: &[StepKind] = &[
    StepKind::Account,
    StepKind::Personal,
    StepKind::Professional,
    StepKind::Profile,
];

/// Registration flow for one side of the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationFlow {
    Business,
    Expert,
}

impl RegistrationFlow {
    pub fn for_role(role: AccountRole) -> Self {
        match role {
            AccountRole::Business => RegistrationFlow::Business,
            AccountRole::Expert => RegistrationFlow::Expert,
        }
    }

    pub fn role(&self) -> AccountRole {
        match self {
            RegistrationFlow::Business => AccountRole::Business,
            RegistrationFlow::Expert => AccountRole::Expert,
        }
    }

    /// Steps in the order they are presented.
    pub fn steps(&self) -> &'static [StepKind] {
        match self {
            RegistrationFlow::Business => BUSINESS_STEPS,
            RegistrationFlow::Expert => EXPERT_STEPS,
        }
    }

    /// Build the submission payload from a draft.
    ///
    /// # Errors
    /// [`WizardError::Incomplete`] naming the first step without data.
    pub fn assemble(&self, draft: &RegistrationDraft) -> Result<RegistrationPayload, WizardError> {
        let account = draft.account().ok_or(WizardError::Incomplete(StepKind::Account))?.clone();
        let payload = match self {
            RegistrationFlow::Business => BusinessRegistration {
                account,
                company: draft.company().ok_or(WizardError::Incomplete(StepKind::Company))?.clone(),
                requirements: draft
                    .requirements()
                    .ok_or(WizardError::Incomplete(StepKind::Requirements))?
                    .clone(),
            }
            .into(),
            RegistrationFlow::Expert => ExpertRegistration {
                account,
                personal: draft.personal().ok_or(WizardError::Incomplete(StepKind::Personal))?.clone(),
                professional: draft
                    .professional()
                    .ok_or(WizardError::Incomplete(StepKind::Professional))?
                    .clone(),
                profile: draft.profile().ok_or(WizardError::Incomplete(StepKind::Profile))?.clone(),
            }
            .into(),
        };

        Ok(payload)
    }
}
