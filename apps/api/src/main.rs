mod config;
mod distance;
mod errors;
mod routes;
mod state;
mod tools;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::distance::engine::ConversionEngine;
use crate::distance::gateway::ConversionGateway;
use crate::distance::tool::DistanceConverterTool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tools::ToolRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AstroBiblia API v{}", env!("CARGO_PKG_VERSION"));

    // Conversion pipeline is stateless; one gateway serves every request
    let gateway = ConversionGateway::new(ConversionEngine::new());

    // Register agent tools
    let tools = ToolRegistry::new().register(Arc::new(DistanceConverterTool::new(gateway)));
    info!(
        "Tool registry initialized ({} tools)",
        tools.definitions().len()
    );

    // Build app state
    let state = AppState {
        gateway,
        tools: Arc::new(tools),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
