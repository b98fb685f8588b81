//! SeaORM entities and their conversions to domain types.

pub mod account;
pub mod business_profile;
pub mod expert_profile;

use serde::{de::DeserializeOwned, Serialize};

use common::{AppError, AppResult};

/// Encode a set-valued field for a JSON column.
pub(crate) fn to_json<T: Serialize>(value: &T) -> AppResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| AppError::internal(format!("Failed to encode JSON column: {}", e)))
}

/// Decode a JSON column into a set-valued field.
pub(crate) fn from_json<T: DeserializeOwned>(value: serde_json::Value) -> AppResult<T> {
    serde_json::from_value(value)
        .map_err(|e| AppError::internal(format!("Failed to decode JSON column: {}", e)))
}
