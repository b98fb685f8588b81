//! Role-specific profiles linked 1:1 to an account.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::AccountResponse;
use crate::catalog::{CompanySize, FinancialCertification, FinancialExpertiseArea};
use crate::registration::{BusinessRegistration, ExpertRegistration};

/// Profile of a business looking for expertise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BusinessProfile {
    pub id: Uuid,
    pub account_id: Uuid,
    pub company_name: String,
    pub description: String,
    pub industry_type: String,
    pub company_size: CompanySize,
    pub location: String,
    pub services_needed: Vec<FinancialExpertiseArea>,
    pub budget_min: f64,
    pub budget_max: f64,
    pub timeline: String,
}

impl BusinessProfile {
    /// Build the profile for a new account from a validated payload.
    pub fn from_registration(account_id: Uuid, payload: &BusinessRegistration) -> Self {
        let company = &payload.company;
        let requirements = &payload.requirements;
        Self {
            id: Uuid::new_v4(),
            account_id,
            company_name: company.company_name.clone(),
            description: company.description.clone(),
            industry_type: company.industry_type.clone(),
            company_size: company.company_size,
            location: requirements.location.clone(),
            services_needed: as_set(requirements.services_needed.iter().copied()),
            budget_min: requirements.budget_min,
            budget_max: requirements.budget_max,
            timeline: requirements.timeline.clone(),
        }
    }
}

/// Profile of an expert offering services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExpertProfile {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub professional_title: String,
    pub years_of_experience: i32,
    pub areas_of_expertise: Vec<FinancialExpertiseArea>,
    pub certifications: Vec<FinancialCertification>,
    pub hourly_rate: f64,
    pub location: String,
    pub remote_only: bool,
    pub bio: String,
    pub professional_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    pub languages: Vec<String>,
}

impl ExpertProfile {
    /// Build the profile for a new account from a validated payload.
    pub fn from_registration(account_id: Uuid, payload: &ExpertRegistration) -> Self {
        let personal = &payload.personal;
        let professional = &payload.professional;
        let profile = &payload.profile;
        Self {
            id: Uuid::new_v4(),
            account_id,
            name: personal.name.clone(),
            professional_title: personal.professional_title.clone(),
            years_of_experience: professional.years_of_experience,
            areas_of_expertise: as_set(professional.areas_of_expertise.iter().copied()),
            certifications: as_set(professional.certifications.iter().copied()),
            hourly_rate: professional.hourly_rate,
            location: personal.location.clone(),
            remote_only: personal.remote_only,
            bio: profile.bio.clone(),
            professional_summary: profile.professional_summary.clone(),
            linkedin_url: profile.linkedin().map(str::to_string),
            website_url: profile.website().map(str::to_string),
            languages: as_set(
                personal
                    .languages
                    .iter()
                    .map(|l| l.trim())
                    .filter(|l| !l.is_empty())
                    .map(str::to_string),
            ),
        }
    }
}

/// Role-specific half of an account, keyed by role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AccountProfile {
    Business(BusinessProfile),
    Expert(ExpertProfile),
}

/// Public account fields together with the profile, if one exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccountWithProfile {
    pub account: AccountResponse,
    pub profile: Option<AccountProfile>,
}

/// De-duplicate and order a set-valued field.
fn as_set<T: Ord>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut set: Vec<T> = items.into_iter().collect();
    set.sort();
    set.dedup();
    set
}
