//! `HttpRegistrationApi` against a local axum server.

use axum::{http::StatusCode, response::Json, routing::post, Router};
use serde_json::{json, Value};

use domain::{AccountRole, BusinessRegistration, Credentials, ExpertRegistration};
use registration_client::{ApiError, HttpRegistrationApi, RegistrationApi, RegistrationClientConfig};

const LONG_TEXT: &str = "We are a growing company looking for expert financial advice.";

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn api(base_url: String) -> HttpRegistrationApi {
    HttpRegistrationApi::new(&RegistrationClientConfig {
        api_url: base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

fn business() -> BusinessRegistration {
    serde_json::from_value(json!({
        "email": "a@b.com",
        "password": "longenough1",
        "confirmPassword": "longenough1",
        "companyName": "Acme",
        "description": LONG_TEXT,
        "industryType": "Finance",
        "companySize": "SMALL",
        "location": "NYC",
        "servicesNeeded": ["TAX_PLANNING"],
        "budgetMin": 1000,
        "budgetMax": 5000,
        "timeline": "3 months"
    }))
    .unwrap()
}

fn expert() -> ExpertRegistration {
    serde_json::from_value(json!({
        "email": "jane@example.com",
        "password": "longenough1",
        "name": "Jane Doe",
        "professionalTitle": "Senior Financial Advisor",
        "location": "London",
        "remoteOnly": false,
        "languages": ["English"],
        "yearsOfExperience": 12,
        "areasOfExpertise": ["WEALTH_MANAGEMENT"],
        "hourlyRate": 150,
        "bio": LONG_TEXT,
        "professionalSummary": LONG_TEXT
    }))
    .unwrap()
}

fn error_body(code: &str, message: &str) -> Json<Value> {
    Json(json!({ "error": { "code": code, "message": message } }))
}

#[tokio::test]
async fn test_successful_registration_is_decoded() {
    let router = Router::new().route(
        "/auth/register/business",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["companyName"], "Acme");
            assert_eq!(body["servicesNeeded"][0], "TAX_PLANNING");
            let email = body["email"].clone();
            (
                StatusCode::CREATED,
                Json(json!({
                    "id": "6f1c1d2e-0a4b-4c43-9a57-1d2f3e4a5b6c",
                    "email": email,
                    "role": "business",
                    "createdAt": "2024-01-01T00:00:00Z"
                })),
            )
        }),
    );
    let api = api(spawn(router).await);

    let account = api.register_business(&business()).await.unwrap();

    assert_eq!(account.email, "a@b.com");
    assert_eq!(account.role, AccountRole::Business);
}

#[tokio::test]
async fn test_error_envelopes_are_mapped() {
    let router = Router::new()
        .route(
            "/auth/register/business",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": {
                            "code": "VALIDATION_ERROR",
                            "message": "Maximum budget must be greater than or equal to minimum budget",
                            "fields": { "budgetMax": ["Maximum budget must be greater than or equal to minimum budget"] }
                        }
                    })),
                )
            }),
        )
        .route(
            "/auth/register/expert",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    error_body("CONFLICT", "Account with this email already exists"),
                )
            }),
        )
        .route(
            "/auth/login",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    error_body("INVALID_CREDENTIALS", "Invalid email or password"),
                )
            }),
        );
    let api = api(format!("{}/", spawn(router).await));

    match api.register_business(&business()).await.unwrap_err() {
        ApiError::Validation { fields, .. } => assert!(fields.contains("budgetMax")),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(matches!(
        api.register_expert(&expert()).await,
        Err(ApiError::Conflict(m)) if m == "Account with this email already exists"
    ));
    assert!(matches!(
        api.authenticate(&Credentials::new("a@b.com", "wrong-password")).await,
        Err(ApiError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_non_json_failure_is_unexpected() {
    let router = Router::new().route(
        "/auth/login",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
    );
    let api = api(spawn(router).await);

    let err = api
        .authenticate(&Credentials::new("a@b.com", "longenough1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unexpected { status: 502, .. }));
    assert_eq!(err.user_message(), domain::GENERIC_SUBMISSION_ERROR);
}
