//! Integration tests for the HTTP surface.
//!
//! The account and auth services are mocked, so no database is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use account_service_lib::service::{MockAccountService, MockAuthService};
use common::{AppError, AppResult};
use domain::{
    AccountProfile, AccountResponse, AccountRole, AccountWithProfile, BusinessProfile,
    CompanySize, FinancialExpertiseArea, SessionClaims, SessionResponse,
};
use gateway_lib::routes::create_router;
use gateway_lib::state::{AppState, DatabaseCheck};

// =============================================================================
// Test Helpers
// =============================================================================

/// Database check with a fixed outcome
struct StubCheck {
    healthy: bool,
}

#[async_trait]
impl DatabaseCheck for StubCheck {
    async fn ping(&self) -> AppResult<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::internal("connection refused"))
        }
    }
}

fn app(accounts: MockAccountService, auth: MockAuthService) -> Router {
    app_with_database(accounts, auth, true)
}

fn app_with_database(accounts: MockAccountService, auth: MockAuthService, healthy: bool) -> Router {
    create_router(AppState::new(
        Arc::new(accounts),
        Arc::new(auth),
        Arc::new(StubCheck { healthy }),
    ))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn business_payload() -> Value {
    json!({
        "email": "a@b.com",
        "password": "longenough1",
        "confirmPassword": "longenough1",
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

fn expert_payload() -> Value {
    json!({
        "email": "jane@example.com",
        "password": "longenough1",
        "confirmPassword": "longenough1",
        "name": "Jane Doe",
        "professionalTitle": "Senior Financial Advisor",
        "location": "London",
        "remoteOnly": true,
        "languages": ["English"],
        "yearsOfExperience": 12,
        "areasOfExpertise": ["WEALTH_MANAGEMENT"],
        "certifications": ["CFA"],
        "hourlyRate": 150,
        "bio": "Twelve years advising family offices on long-term wealth preservation strategy.",
        "professionalSummary": "Former portfolio manager focused on multi-generational wealth planning and tax efficiency."
    })
}

fn account_response(email: &str, role: AccountRole) -> AccountResponse {
    AccountResponse {
        id: Uuid::new_v4(),
        email: email.to_string(),
        role,
        created_at: Utc::now(),
    }
}

fn claims(id: Uuid) -> SessionClaims {
    let now = Utc::now().timestamp();
    SessionClaims {
        sub: id,
        email: "a@b.com".to_string(),
        role: "business".to_string(),
        exp: now + 3600,
        iat: now,
    }
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_business_returns_created_account() {
    let mut accounts = MockAccountService::new();
    accounts
        .expect_register_business()
        .times(1)
        .withf(|payload| payload.account.email == "a@b.com" && payload.requirements.budget_max == 5000.0)
        .returning(|payload| Ok(account_response(&payload.account.email, AccountRole::Business)));

    let (status, body) = send(
        app(accounts, MockAuthService::new()),
        post_json("/auth/register/business", business_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["role"], "business");
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_business_accepts_payload_without_confirmation() {
    let mut accounts = MockAccountService::new();
    accounts
        .expect_register_business()
        .times(1)
        .withf(|payload| payload.account.confirm_password.is_none())
        .returning(|payload| Ok(account_response(&payload.account.email, AccountRole::Business)));

    let body = json!({
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
    });

    let (status, body) = send(
        app(accounts, MockAuthService::new()),
        post_json("/auth/register/business", body),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "business");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_register_business_rejects_inverted_budget_before_service() {
    let mut accounts = MockAccountService::new();
    accounts.expect_register_business().never();

    let mut payload = business_payload();
    payload["budgetMin"] = json!(5000);
    payload["budgetMax"] = json!(1000);

    let (status, body) = send(
        app(accounts, MockAuthService::new()),
        post_json("/auth/register/business", payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["fields"]["budgetMax"].is_array());
}

#[tokio::test]
async fn test_register_reports_every_failing_field() {
    let mut accounts = MockAccountService::new();
    accounts.expect_register_business().never();

    let mut payload = business_payload();
    payload["email"] = json!("not-an-email");
    payload["confirmPassword"] = json!("different1");
    payload["servicesNeeded"] = json!([]);

    let (status, body) = send(
        app(accounts, MockAuthService::new()),
        post_json("/auth/register/business", payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields = &body["error"]["fields"];
    assert!(fields["email"].is_array());
    assert_eq!(fields["confirmPassword"][0], "Passwords don't match");
    assert!(fields["servicesNeeded"].is_array());
}

#[tokio::test]
async fn test_register_rejects_unknown_enumeration_value() {
    let mut accounts = MockAccountService::new();
    accounts.expect_register_business().never();

    let mut payload = business_payload();
    payload["companySize"] = json!("ENORMOUS");

    let (status, body) = send(
        app(accounts, MockAuthService::new()),
        post_json("/auth/register/business", payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_duplicate_email_is_conflict() {
    let mut accounts = MockAccountService::new();
    accounts
        .expect_register_business()
        .returning(|_| Err(AppError::conflict("Account with this email")));

    let (status, body) = send(
        app(accounts, MockAuthService::new()),
        post_json("/auth/register/business", business_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_register_expert_returns_created_account() {
    let mut accounts = MockAccountService::new();
    accounts
        .expect_register_expert()
        .times(1)
        .returning(|payload| Ok(account_response(&payload.account.email, AccountRole::Expert)));

    let (status, body) = send(
        app(accounts, MockAuthService::new()),
        post_json("/auth/register/expert", expert_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "expert");
}

#[tokio::test]
async fn test_register_expert_rejects_bad_linkedin_url() {
    let mut accounts = MockAccountService::new();
    accounts.expect_register_expert().never();

    let mut payload = expert_payload();
    payload["linkedinUrl"] = json!("linkedin.com/in/jane");

    let (status, body) = send(
        app(accounts, MockAuthService::new()),
        post_json("/auth/register/expert", payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["fields"]["linkedinUrl"][0], "Invalid LinkedIn URL");
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_login_returns_session() {
    let account_id = Uuid::new_v4();
    let mut auth = MockAuthService::new();
    auth.expect_authenticate()
        .withf(|email, password| email == "a@b.com" && password == "longenough1")
        .returning(move |_, _| {
            Ok(SessionResponse {
                access_token: "token".to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 3600,
                expires_at: Utc::now(),
                account_id,
            })
        });

    let (status, body) = send(
        app(MockAccountService::new(), auth),
        post_json("/auth/login", json!({ "email": "a@b.com", "password": "longenough1" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accessToken"], "token");
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["accountId"], account_id.to_string());
}

#[tokio::test]
async fn test_login_failure_is_invalid_credentials() {
    let mut auth = MockAuthService::new();
    auth.expect_authenticate()
        .returning(|_, _| Err(AppError::InvalidCredentials));

    let (status, body) = send(
        app(MockAccountService::new(), auth),
        post_json("/auth/login", json!({ "email": "", "password": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    assert!(body["error"].get("fields").is_none());
}

#[tokio::test]
async fn test_session_requires_token() {
    let (status, body) = send(
        app(MockAccountService::new(), MockAuthService::new()),
        get("/auth/session", None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_session_returns_claims() {
    let account_id = Uuid::new_v4();
    let mut auth = MockAuthService::new();
    auth.expect_verify_session()
        .withf(|token| token == "valid-token")
        .returning(move |_| Ok(claims(account_id)));

    let (status, body) = send(
        app(MockAccountService::new(), auth),
        get("/auth/session", Some("valid-token")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sub"], account_id.to_string());
    assert_eq!(body["role"], "business");
}

// =============================================================================
// Accounts
// =============================================================================

#[tokio::test]
async fn test_current_account_includes_profile() {
    let account_id = Uuid::new_v4();

    let mut auth = MockAuthService::new();
    auth.expect_verify_session()
        .returning(move |_| Ok(claims(account_id)));

    let mut accounts = MockAccountService::new();
    accounts
        .expect_get_account()
        .withf(move |id| *id == account_id)
        .returning(|id| {
            let mut account = account_response("a@b.com", AccountRole::Business);
            account.id = id;
            Ok(AccountWithProfile {
                account,
                profile: Some(AccountProfile::Business(BusinessProfile {
                    id: Uuid::new_v4(),
                    account_id: id,
                    company_name: "Acme".to_string(),
                    description: "We are a growing company looking for expert financial advice."
                        .to_string(),
                    industry_type: "Finance".to_string(),
                    company_size: CompanySize::Small,
                    location: "NYC".to_string(),
                    services_needed: vec![FinancialExpertiseArea::TaxPlanning],
                    budget_min: 1000.0,
                    budget_max: 5000.0,
                    timeline: "3 months".to_string(),
                })),
            })
        });

    let (status, body) = send(app(accounts, auth), get("/accounts/me", Some("token"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["account"]["id"], account_id.to_string());
    assert_eq!(body["profile"]["business"]["companyName"], "Acme");
    assert_eq!(body["profile"]["business"]["servicesNeeded"][0], "TAX_PLANNING");
}

#[tokio::test]
async fn test_current_account_rejects_expired_token() {
    let mut auth = MockAuthService::new();
    auth.expect_verify_session()
        .returning(|_| Err(AppError::Unauthorized));

    let mut accounts = MockAccountService::new();
    accounts.expect_get_account().never();

    let (status, _) = send(app(accounts, auth), get("/accounts/me", Some("expired"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Catalog and Health
// =============================================================================

#[tokio::test]
async fn test_catalog_lists_enumerations() {
    let (status, body) = send(
        app(MockAccountService::new(), MockAuthService::new()),
        get("/catalog", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["companySizes"].as_array().unwrap().len(), 3);
    assert_eq!(body["expertiseAreas"].as_array().unwrap().len(), 16);
    assert_eq!(body["certifications"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_health_reports_database_status() {
    let (status, body) = send(
        app(MockAccountService::new(), MockAuthService::new()),
        get("/health", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(
        app_with_database(MockAccountService::new(), MockAuthService::new(), false),
        get("/health", None),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = send(
        app(MockAccountService::new(), MockAuthService::new()),
        get("/api-docs/openapi.json", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/auth/register/business"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer_auth"].is_object());
}
