//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use domain::{
    AccountDetails, AccountProfile, AccountResponse, AccountRole, AccountWithProfile,
    BusinessProfile, BusinessRegistration, Catalog, CatalogOption, CompanyDetails, CompanySize,
    Credentials, ExpertProfile, ExpertRegistration, FinancialCertification,
    FinancialExpertiseArea, PersonalInfo, ProfessionalInfo, ProfileDetails, Requirements,
    SessionClaims, SessionResponse,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::register_business,
        crate::handlers::auth_handler::register_expert,
        crate::handlers::auth_handler::login,
        crate::handlers::auth_handler::current_session,
        crate::handlers::account_handler::get_current_account,
        crate::handlers::catalog_handler::get_catalog,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            AccountDetails,
            CompanyDetails,
            Requirements,
            BusinessRegistration,
            PersonalInfo,
            ProfessionalInfo,
            ProfileDetails,
            ExpertRegistration,
            Credentials,
            SessionResponse,
            SessionClaims,
            AccountRole,
            AccountResponse,
            AccountProfile,
            AccountWithProfile,
            BusinessProfile,
            ExpertProfile,
            CompanySize,
            FinancialExpertiseArea,
            FinancialCertification,
            Catalog,
            CatalogOption,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and sign-in endpoints"),
        (name = "Accounts", description = "Account endpoints"),
        (name = "Catalog", description = "Registration form options"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
