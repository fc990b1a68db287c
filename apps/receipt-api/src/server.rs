//! # API Server
//!
//! Binds the listener and serves the router until a shutdown signal.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ServerSettings;
use crate::error::ServerError;
use crate::routes::router;
use crate::AppState;

/// A bound, not yet serving, HTTP server.
pub struct ApiServer {
    listener: TcpListener,
}

impl ApiServer {
    /// Binds the listener described by `settings`.
    pub async fn bind(settings: &ServerSettings) -> Result<Self, ServerError> {
        let addr = settings.socket_addr()?;
        let listener = TcpListener::bind(addr).await.map_err(|source| ServerError::Bind {
            addr: settings.bind_address(),
            source,
        })?;

        info!(addr = %listener.local_addr()?, "API server bound");
        Ok(ApiServer { listener })
    }

    /// The address actually bound (differs from the settings for port 0).
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves requests until `shutdown` completes, then drains in-flight
    /// requests and returns.
    pub async fn serve<F>(self, state: AppState, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, router(state))
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("API server stopped");
        Ok(())
    }
}

/// Graceful shutdown signal handler.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
