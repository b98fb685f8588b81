//! Form step controller.
//!
//! [`RegistrationWizard`] is a plain state object: it knows the current
//! step, the draft and the last submission error, and exposes the
//! transitions a form needs. Rendering is left to the caller.
//!
//! `advance` and `submit` take `&mut self`, so a pending submission blocks
//! every other transition until it resolves.

use domain::{AccountResponse, RegistrationPayload, Schema, POST_REGISTRATION_REDIRECT};
use tracing::{debug, info, warn};

use crate::api::RegistrationApi;
use crate::draft::RegistrationDraft;
use crate::error::WizardError;
use crate::flow::RegistrationFlow;
use crate::steps::{StepData, StepKind};

/// Where a step stands relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// One entry of the progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepProgress {
    pub kind: StepKind,
    pub title: &'static str,
    pub description: &'static str,
    pub status: StepStatus,
}

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub account: AccountResponse,
    /// Where to send the user next
    pub redirect_to: &'static str,
}

/// Result of an accepted transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Moved to another step
    Moved(StepKind),
    /// Submission succeeded; the wizard is finished
    Completed(Completion),
}

/// Multi-step registration state.
#[derive(Debug, Clone)]
pub struct RegistrationWizard {
    flow: RegistrationFlow,
    step_index: usize,
    draft: RegistrationDraft,
    last_error: Option<String>,
    completion: Option<Completion>,
}

impl RegistrationWizard {
    /// Start at the first step with an empty draft.
    pub fn new(flow: RegistrationFlow) -> Self {
        Self {
            flow,
            step_index: 0,
            draft: RegistrationDraft::new(),
            last_error: None,
            completion: None,
        }
    }

    pub fn flow(&self) -> RegistrationFlow {
        self.flow
    }

    pub fn current_step(&self) -> StepKind {
        self.flow.steps()[self.step_index]
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn step_count(&self) -> usize {
        self.flow.steps().len()
    }

    pub fn is_first_step(&self) -> bool {
        self.step_index == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.step_index + 1 == self.step_count()
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Previously entered data for a step, to repopulate its form.
    pub fn step_data(&self, kind: StepKind) -> Option<&StepData> {
        self.draft.get(kind)
    }

    /// Message from the most recent failed submission.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }

    /// Title, description and status of every step.
    pub fn progress(&self) -> Vec<StepProgress> {
        self.flow
            .steps()
            .iter()
            .enumerate()
            .map(|(index, kind)| StepProgress {
                kind: *kind,
                title: kind.title(),
                description: kind.description(),
                status: if self.is_completed() || index < self.step_index {
                    StepStatus::Completed
                } else if index == self.step_index {
                    StepStatus::Current
                } else {
                    StepStatus::Upcoming
                },
            })
            .collect()
    }

    /// Validate the current step's data and move on; the final step submits.
    ///
    /// A rejected step leaves the draft and the position untouched and never
    /// reaches the API.
    pub async fn advance<A>(&mut self, data: impl Into<StepData>, api: &A) -> Result<Transition, WizardError>
    where
        A: RegistrationApi + ?Sized,
    {
        self.ensure_open()?;

        let data = data.into();
        let expected = self.current_step();
        if data.kind() != expected {
            return Err(WizardError::WrongStep {
                expected,
                got: data.kind(),
            });
        }
        data.check().map_err(WizardError::Invalid)?;

        self.draft.insert(data);

        if self.is_last_step() {
            return self.submit_draft(api).await;
        }

        self.step_index += 1;
        debug!(step = %self.current_step(), "Registration step completed");
        Ok(Transition::Moved(self.current_step()))
    }

    /// Go back one step, keeping every entered value. No-op on the first step.
    pub fn retreat(&mut self) -> StepKind {
        if self.completion.is_none() && self.step_index > 0 {
            self.step_index -= 1;
        }
        self.current_step()
    }

    /// Resubmit the stored draft from the final step, e.g. after a failure.
    pub async fn submit<A>(&mut self, api: &A) -> Result<Transition, WizardError>
    where
        A: RegistrationApi + ?Sized,
    {
        self.ensure_open()?;
        if !self.is_last_step() {
            return Err(WizardError::NotOnFinalStep);
        }
        self.submit_draft(api).await
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.is_completed() {
            return Err(WizardError::Completed);
        }
        Ok(())
    }

    async fn submit_draft<A>(&mut self, api: &A) -> Result<Transition, WizardError>
    where
        A: RegistrationApi + ?Sized,
    {
        let payload = self.flow.assemble(&self.draft)?;
        self.last_error = None;

        let result = match &payload {
            RegistrationPayload::Business(p) => api.register_business(p).await,
            RegistrationPayload::Expert(p) => api.register_expert(p).await,
        };

        match result {
            Ok(account) => {
                info!(account_id = %account.id, role = %account.role, "Registration completed");
                let completion = Completion {
                    account,
                    redirect_to: POST_REGISTRATION_REDIRECT,
                };
                self.completion = Some(completion.clone());
                Ok(Transition::Completed(completion))
            }
            Err(e) => {
                warn!("Registration submission failed: {}", e);
                self.last_error = Some(e.user_message());
                Err(WizardError::Submission(e))
            }
        }
    }
}
