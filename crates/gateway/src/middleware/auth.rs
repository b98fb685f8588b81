//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::AccountRole;

use crate::state::AppState;

/// Current authenticated account extracted from the session token.
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub id: Uuid,
    pub email: String,
    pub role: AccountRole,
}

/// Authentication middleware that validates session tokens.
///
/// Inserts both the raw [`SessionClaims`](domain::SessionClaims) and the
/// [`CurrentAccount`] into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request)?;

    let claims = state.auth.verify_session(&token)?;
    let role = claims
        .role
        .parse::<AccountRole>()
        .map_err(|_| AppError::Unauthorized)?;

    let current = CurrentAccount {
        id: claims.sub,
        email: claims.email.clone(),
        role,
    };
    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(current);

    Ok(next.run(request).await)
}

/// Extract bearer token from Authorization header.
fn extract_token(request: &Request<Body>) -> AppResult<String> {
    request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
        .ok_or(AppError::Unauthorized)
}
