mod catalog;
mod config;
mod errors;
mod llm_client;
mod recommendation;
mod roadmap;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::load_catalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::{AiServices, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Coursepath API v{}", env!("CARGO_PKG_VERSION"));

    // Catalog load failure is fatal: no partial catalog is served
    let catalog = load_catalog(&config.catalog_path)
        .with_context(|| format!("Failed to load course catalog from {}", config.catalog_path))?;
    if catalog.is_empty() {
        warn!("Catalog is empty: every recommendation request will return no courses");
    }

    let ai = AiServices::from_config(&config);
    let state = AppState::new(config.clone(), Arc::new(catalog), ai);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
