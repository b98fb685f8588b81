//! HTTP handlers.

pub mod account_handler;
pub mod auth_handler;
pub mod catalog_handler;
pub mod health_handler;

pub use account_handler::account_routes;
pub use auth_handler::{auth_routes, session_routes};
pub use catalog_handler::catalog_routes;
pub use health_handler::health_routes;
