//! Catalog of registration form options.

use axum::{response::Json, routing::get, Router};

use domain::Catalog;

use crate::state::AppState;

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new().route("/", get(get_catalog))
}

/// List company sizes, expertise areas, certifications and languages
#[utoipa::path(
    get,
    path = "/catalog",
    tag = "Catalog",
    responses(
        (status = 200, description = "Enumerations with display labels", body = Catalog)
    )
)]
pub async fn get_catalog() -> Json<Catalog> {
    Json(Catalog::new())
}
