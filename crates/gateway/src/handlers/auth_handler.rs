//! Registration and authentication handlers.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use common::AppResult;
use domain::{AccountResponse, BusinessRegistration, Credentials, ExpertRegistration, SessionClaims, SessionResponse};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create public authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register/business", post(register_business))
        .route("/register/expert", post(register_expert))
        .route("/login", post(login))
}

/// Create routes that require a session
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/session", get(current_session))
}

/// Register a business account
#[utoipa::path(
    post,
    path = "/auth/register/business",
    tag = "Authentication",
    request_body = BusinessRegistration,
    responses(
        (status = 201, description = "Account and business profile created", body = AccountResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register_business(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BusinessRegistration>,
) -> AppResult<(StatusCode, Json<AccountResponse>)> {
    let account = state.accounts.register_business(payload).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// Register an expert account
#[utoipa::path(
    post,
    path = "/auth/register/expert",
    tag = "Authentication",
    request_body = ExpertRegistration,
    responses(
        (status = 201, description = "Account and expert profile created", body = AccountResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register_expert(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ExpertRegistration>,
) -> AppResult<(StatusCode, Json<AccountResponse>)> {
    let account = state.accounts.register_expert(payload).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// Sign in and get a session token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = Credentials,
    responses(
        (status = 200, description = "Login successful", body = SessionResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> AppResult<Json<SessionResponse>> {
    let session = state
        .auth
        .authenticate(&credentials.email, &credentials.password)
        .await?;

    Ok(Json(session))
}

/// Inspect the current session
#[utoipa::path(
    get,
    path = "/auth/session",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Claims of the presented token", body = SessionClaims),
        (status = 401, description = "Missing, invalid or expired token")
    )
)]
pub async fn current_session(Extension(claims): Extension<SessionClaims>) -> Json<SessionClaims> {
    Json(claims)
}
