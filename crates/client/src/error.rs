//! Client-side errors.

use thiserror::Error;

use domain::{FieldErrors, GENERIC_SUBMISSION_ERROR};

use crate::steps::StepKind;

/// Failure reported by the registration API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Server-side schema failure
    #[error("{message}")]
    Validation { message: String, fields: FieldErrors },

    /// Email already registered
    #[error("{0}")]
    Conflict(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Any other non-success response
    #[error("Unexpected response ({status}): {message}")]
    Unexpected { status: u16, message: String },

    /// Network or decoding failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Message to show next to the form.
    ///
    /// Only validation and conflict messages come from the server; anything
    /// else falls back to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation { message, .. } | ApiError::Conflict(message) => message.clone(),
            ApiError::InvalidCredentials => self.to_string(),
            ApiError::Unexpected { .. } | ApiError::Transport(_) => {
                GENERIC_SUBMISSION_ERROR.to_string()
            }
        }
    }
}

/// Rejected wizard transition.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Data for a step other than the current one
    #[error("Expected data for the {expected} step, got {got}")]
    WrongStep { expected: StepKind, got: StepKind },

    /// The step's schema failed
    #[error("Invalid step data: {0}")]
    Invalid(FieldErrors),

    /// Submission attempted before every step was filled in
    #[error("The {0} step has not been completed")]
    Incomplete(StepKind),

    #[error("Submission is only possible from the final step")]
    NotOnFinalStep,

    #[error("Registration is already complete")]
    Completed,

    /// The API rejected the submission
    #[error(transparent)]
    Submission(#[from] ApiError),
}
