//! Marketplace gateway library.
//!
//! HTTP surface for registration, sign-in and account lookup, backed by the
//! account service running in-process.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use account_service_lib::AccountServices;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect the account service and serve HTTP until shutdown.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let services = AccountServices::connect(&config.accounts).await?;
    let state = AppState::from(services);

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
