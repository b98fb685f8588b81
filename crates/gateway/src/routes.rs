//! Route configuration.

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{account_routes, auth_routes, catalog_routes, health_routes, session_routes};
use crate::middleware::auth_middleware;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check and form options (no auth)
        .nest("/health", health_routes())
        .nest("/catalog", catalog_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Registration and login are public, the session lookup is not
        .nest(
            "/auth",
            auth_routes().merge(session_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            ))),
        )
        // Account routes (auth required)
        .nest(
            "/accounts",
            account_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
