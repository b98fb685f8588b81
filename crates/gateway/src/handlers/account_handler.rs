//! Account handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::AccountWithProfile;

use crate::middleware::CurrentAccount;
use crate::state::AppState;

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_current_account))
}

/// Get the signed-in account with its profile
#[utoipa::path(
    get,
    path = "/accounts/me",
    tag = "Accounts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current account and profile", body = AccountWithProfile),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Account no longer exists")
    )
)]
pub async fn get_current_account(
    Extension(current): Extension<CurrentAccount>,
    State(state): State<AppState>,
) -> AppResult<Json<AccountWithProfile>> {
    let account = state.accounts.get_account(current.id).await?;
    Ok(Json(account))
}
