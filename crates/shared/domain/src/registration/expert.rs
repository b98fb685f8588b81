//! Steps and payload of the expert registration flow.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AccountDetails;
use crate::catalog::{FinancialCertification, FinancialExpertiseArea};
use crate::validation::{field_rules, is_http_url, is_positive, FieldErrors, Schema};

/// Personal information step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonalInfo {
    #[validate(length(min = 2, message = "Name is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Jane Doe"))]
    pub name: String,
    #[validate(length(min = 2, message = "Professional title is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Senior Financial Advisor"))]
    pub professional_title: String,
    #[validate(length(min = 2, message = "Location is required"))]
    pub location: String,
    pub remote_only: bool,
    /// Free-form; see [`crate::constants::SUGGESTED_LANGUAGES`]
    pub languages: Vec<String>,
}

impl Schema for PersonalInfo {
    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = field_rules(self.validate());
        if self.languages.iter().all(|l| l.trim().is_empty()) {
            errors.add("languages", "Select at least one language");
        }
        errors.into_result()
    }
}

/// Professional information step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProfessionalInfo {
    #[validate(range(min = 0, message = "Years of experience cannot be negative"))]
    pub years_of_experience: i32,
    #[validate(length(min = 1, message = "Select at least one area of expertise"))]
    pub areas_of_expertise: Vec<FinancialExpertiseArea>,
    #[serde(default)]
    pub certifications: Vec<FinancialCertification>,
    #[cfg_attr(feature = "openapi", schema(example = 150.0))]
    pub hourly_rate: f64,
}

impl Schema for ProfessionalInfo {
    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = field_rules(self.validate());
        if !is_positive(self.hourly_rate) {
            errors.add("hourlyRate", "Hourly rate must be greater than zero");
        }
        errors.into_result()
    }
}

/// Public profile step. Links are optional; an empty string counts as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProfileDetails {
    #[validate(length(min = 50, message = "Bio must be at least 50 characters"))]
    pub bio: String,
    #[validate(length(min = 50, message = "Professional summary must be at least 50 characters"))]
    pub professional_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

impl ProfileDetails {
    /// LinkedIn URL with empty input treated as none
    pub fn linkedin(&self) -> Option<&str> {
        non_blank(&self.linkedin_url)
    }

    /// Website URL with empty input treated as none
    pub fn website(&self) -> Option<&str> {
        non_blank(&self.website_url)
    }
}

impl Schema for ProfileDetails {
    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = field_rules(self.validate());
        if self.linkedin().is_some_and(|url| !is_http_url(url)) {
            errors.add("linkedinUrl", "Invalid LinkedIn URL");
        }
        if self.website().is_some_and(|url| !is_http_url(url)) {
            errors.add("websiteUrl", "Invalid website URL");
        }
        errors.into_result()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Everything an expert submits, as one flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExpertRegistration {
    #[serde(flatten)]
    pub account: AccountDetails,
    #[serde(flatten)]
    pub personal: PersonalInfo,
    #[serde(flatten)]
    pub professional: ProfessionalInfo,
    #[serde(flatten)]
    pub profile: ProfileDetails,
}

impl Schema for ExpertRegistration {
    fn check(&self) -> Result<(), FieldErrors> {
        FieldErrors::collect([
            self.account.check(),
            self.personal.check(),
            self.professional.check(),
            self.profile.check(),
        ])
    }
}
