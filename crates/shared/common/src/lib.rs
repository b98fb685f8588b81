//! Common utilities shared across the workspace services.
//!
//! This crate provides:
//! - Unified error handling with HTTP mapping
//! - Configuration structures loaded from the environment

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, ErrorBody, ErrorResponse, OptionExt};
