//! Account step, shared by both registration flows.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{field_rules, FieldErrors, Schema};

/// Email and password chosen at registration.
#[derive(Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccountDetails {
    #[validate(email(message = "Invalid email address"))]
    #[cfg_attr(feature = "openapi", schema(example = "jane@example.com"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "longenough1", min_length = 8))]
    pub password: String,
    /// Repeats `password`. Forms always send it; API callers may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

// Don't expose passwords in debug output
impl std::fmt::Debug for AccountDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountDetails")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

impl AccountDetails {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let password = password.into();
        Self {
            email: email.into(),
            confirm_password: Some(password.clone()),
            password,
        }
    }

    /// Form-side check: the confirmation must be present as well as match.
    pub fn check_confirmed(&self) -> Result<(), FieldErrors> {
        let mut errors = self.check().err().unwrap_or_default();
        if self.confirm_password.is_none() {
            errors.add("confirmPassword", "Please confirm your password");
        }
        errors.into_result()
    }
}

impl Schema for AccountDetails {
    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = field_rules(self.validate());
        if self
            .confirm_password
            .as_ref()
            .is_some_and(|confirm| *confirm != self.password)
        {
            errors.add("confirmPassword", "Passwords don't match");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_account_details() {
        assert!(AccountDetails::new("a@b.com", "longenough1").check().is_ok());
    }

    #[test]
    fn test_invalid_email_and_short_password() {
        let details = AccountDetails::new("not-an-email", "short");
        let errors = details.check().unwrap_err();

        assert_eq!(errors.get("email").unwrap(), ["Invalid email address"]);
        assert_eq!(
            errors.get("password").unwrap(),
            ["Password must be at least 8 characters"]
        );
        assert!(!errors.contains("confirmPassword"));
    }

    #[test]
    fn test_password_mismatch_is_reported_on_confirm_field() {
        let mut details = AccountDetails::new("a@b.com", "longenough1");
        details.confirm_password = Some("longenough2".into());

        let errors = details.check().unwrap_err();
        assert_eq!(errors.get("confirmPassword").unwrap(), ["Passwords don't match"]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let details: AccountDetails = serde_json::from_value(serde_json::json!({
            "email": "a@b.com",
            "password": "longenough1",
            "confirmPassword": "longenough1"
        }))
        .unwrap();
        assert_eq!(details, AccountDetails::new("a@b.com", "longenough1"));
    }

    #[test]
    fn test_confirmation_is_optional_on_the_wire() {
        let details: AccountDetails = serde_json::from_value(serde_json::json!({
            "email": "a@b.com",
            "password": "longenough1"
        }))
        .unwrap();

        assert!(details.confirm_password.is_none());
        assert!(details.check().is_ok());
        assert!(!serde_json::to_value(&details).unwrap().as_object().unwrap().contains_key("confirmPassword"));
    }

    #[test]
    fn test_form_check_requires_confirmation() {
        let mut details = AccountDetails::new("a@b.com", "longenough1");
        assert!(details.check_confirmed().is_ok());

        details.confirm_password = None;
        let errors = details.check_confirmed().unwrap_err();
        assert_eq!(errors.get("confirmPassword").unwrap(), ["Please confirm your password"]);

        details.confirm_password = Some("different1".into());
        let errors = details.check_confirmed().unwrap_err();
        assert_eq!(errors.get("confirmPassword").unwrap(), ["Passwords don't match"]);
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let debug = format!("{:?}", AccountDetails::new("a@b.com", "longenough1"));
        assert!(!debug.contains("longenough1"));
        assert!(debug.contains("a@b.com"));
    }
}
