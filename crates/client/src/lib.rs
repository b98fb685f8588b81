//! Registration client.
//!
//! Drives the multi-step registration forms: holds the draft collected so
//! far, validates each step against the shared schemas before anything goes
//! on the wire, and submits the assembled payload to the gateway.

pub mod api;
pub mod config;
pub mod draft;
pub mod error;
pub mod flow;
pub mod steps;
pub mod wizard;

pub use api::{HttpRegistrationApi, RegistrationApi};
pub use config::RegistrationClientConfig;
pub use draft::RegistrationDraft;
pub use error::{ApiError, WizardError};
pub use flow::RegistrationFlow;
pub use steps::{StepData, StepKind};
pub use wizard::{Completion, RegistrationWizard, StepProgress, StepStatus, Transition};

#[cfg(any(test, feature = "test-utils"))]
pub use api::MockRegistrationApi;
