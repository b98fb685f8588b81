//! Steps and payload of the business registration flow.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AccountDetails;
use crate::catalog::{CompanySize, FinancialExpertiseArea};
use crate::validation::{field_rules, is_positive, FieldErrors, Schema};

/// Company step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CompanyDetails {
    #[validate(length(min = 2, message = "Company name is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Acme"))]
    pub company_name: String,
    #[validate(length(min = 50, message = "Description must be at least 50 characters"))]
    pub description: String,
    #[validate(length(min = 2, message = "Industry type is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Finance"))]
    pub industry_type: String,
    pub company_size: CompanySize,
}

impl Schema for CompanyDetails {
    fn check(&self) -> Result<(), FieldErrors> {
        field_rules(self.validate()).into_result()
    }
}

/// Requirements step. Owns the budget ordering rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Requirements {
    #[validate(length(min = 2, message = "Location is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "NYC"))]
    pub location: String,
    #[validate(length(min = 1, message = "Select at least one service"))]
    pub services_needed: Vec<FinancialExpertiseArea>,
    #[cfg_attr(feature = "openapi", schema(example = 1000.0))]
    pub budget_min: f64,
    #[cfg_attr(feature = "openapi", schema(example = 5000.0))]
    pub budget_max: f64,
    #[validate(length(min = 2, message = "Timeline is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "3 months"))]
    pub timeline: String,
}

impl Schema for Requirements {
    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = field_rules(self.validate());
        if !is_positive(self.budget_min) {
            errors.add("budgetMin", "Minimum budget is required");
        }
        if !is_positive(self.budget_max) {
            errors.add("budgetMax", "Maximum budget is required");
        } else if self.budget_max < self.budget_min {
            errors.add(
                "budgetMax",
                "Maximum budget must be greater than or equal to minimum budget",
            );
        }
        errors.into_result()
    }
}

/// Everything a business submits, as one flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BusinessRegistration {
    #[serde(flatten)]
    pub account: AccountDetails,
    #[serde(flatten)]
    pub company: CompanyDetails,
    #[serde(flatten)]
    pub requirements: Requirements,
}

impl Schema for BusinessRegistration {
    fn check(&self) -> Result<(), FieldErrors> {
        FieldErrors::collect([
            self.account.check(),
            self.company.check(),
            self.requirements.check(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario() -> serde_json::Value {
        json!({
            "email": "a@b.com",
            "password": "longenough1",
            "companyName": "Acme",
            "description": "We are a growing company looking for expert financial advice.",
            "industryType": "Finance",
            "companySize": "SMALL",
            "location": "NYC",
            "servicesNeeded": ["TAX_PLANNING"],
            "budgetMin": 1000,
            "budgetMax": 5000,
            "timeline": "3 months"
        })
    }

    #[test]
    fn test_flat_payload_deserializes_into_steps() {
        let payload: BusinessRegistration = serde_json::from_value(scenario()).unwrap();

        assert_eq!(payload.account.email, "a@b.com");
        assert!(payload.account.confirm_password.is_none());
        assert_eq!(payload.company.company_size, CompanySize::Small);
        assert_eq!(payload.requirements.services_needed, vec![FinancialExpertiseArea::TaxPlanning]);
        assert_eq!(payload.requirements.budget_max, 5000.0);
        assert!(payload.check().is_ok());
    }

    #[test]
    fn test_payload_serializes_flat() {
        let payload: BusinessRegistration = serde_json::from_value(scenario()).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["companyName"], "Acme");
        assert_eq!(value["budgetMin"], 1000.0);
        assert!(value.get("account").is_none());
    }

    #[test]
    fn test_budget_max_below_min_is_rejected_on_budget_max() {
        let mut payload: BusinessRegistration = serde_json::from_value(scenario()).unwrap();
        payload.requirements.budget_min = 5000.0;
        payload.requirements.budget_max = 1000.0;

        let errors = payload.requirements.check().unwrap_err();
        assert_eq!(
            errors.get("budgetMax").unwrap(),
            ["Maximum budget must be greater than or equal to minimum budget"]
        );
        assert!(!errors.contains("budgetMin"));
    }

    #[test]
    fn test_budgets_must_be_positive() {
        let mut payload: BusinessRegistration = serde_json::from_value(scenario()).unwrap();
        payload.requirements.budget_min = 0.0;
        payload.requirements.budget_max = -1.0;

        let errors = payload.requirements.check().unwrap_err();
        assert_eq!(errors.get("budgetMin").unwrap(), ["Minimum budget is required"]);
        assert_eq!(errors.get("budgetMax").unwrap(), ["Maximum budget is required"]);
    }

    #[test]
    fn test_company_step_rules() {
        let company = CompanyDetails {
            company_name: "A".into(),
            description: "too short".into(),
            industry_type: "".into(),
            company_size: CompanySize::Large,
        };
        let errors = company.check().unwrap_err();
        assert_eq!(errors.get("companyName").unwrap(), ["Company name is required"]);
        assert_eq!(
            errors.get("description").unwrap(),
            ["Description must be at least 50 characters"]
        );
        assert_eq!(errors.get("industryType").unwrap(), ["Industry type is required"]);
    }

    #[test]
    fn test_empty_services_rejected() {
        let mut payload: BusinessRegistration = serde_json::from_value(scenario()).unwrap();
        payload.requirements.services_needed.clear();
        let errors = payload.check().unwrap_err();
        assert_eq!(errors.get("servicesNeeded").unwrap(), ["Select at least one service"]);
    }

    #[test]
    fn test_unknown_company_size_fails_to_parse() {
        let mut value = scenario();
        value["companySize"] = json!("ENORMOUS");
        assert!(serde_json::from_value::<BusinessRegistration>(value).is_err());
    }
}
