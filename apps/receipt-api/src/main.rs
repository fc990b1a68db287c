//! # Receipt API Server
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipt API Server                               │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► Validator / Scorer ───► In-memory store  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use receipt_api::server::shutdown_signal;
use receipt_api::{ApiConfig, ApiServer, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting receipt points API server...");

    let config = ApiConfig::load(None)?;
    info!(addr = %config.server.bind_address(), "Configuration loaded");

    let state = AppState::in_memory();

    let server = ApiServer::bind(&config.server).await?;
    server.serve(state, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}
