//! Dashboard HTTP server lifecycle management.
//!
//! Provides [`start_server`] which binds to a TCP port, logs the startup
//! banner with sample endpoints, and runs the Axum server until Ctrl-C
//! is received, shutting the listener down cleanly.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the dashboard server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Directory the static-file fallback serves from.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8000,
            static_dir: PathBuf::from("."),
        }
    }
}

/// Errors that can occur when starting or running the dashboard server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

/// Start the dashboard HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until an interrupt is received. Returns `Ok(())` on clean
/// shutdown, or an error if binding or serving fails -- the only fatal
/// error paths the server has.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let router = build_router(state, &config.static_dir);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    log_banner(&addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("dashboard server stopped");
    Ok(())
}

/// Log the startup banner with sample endpoints.
fn log_banner(addr: &SocketAddr) {
    info!(%addr, "dashboard server listening");
    info!("API endpoints available:");
    info!("  - /api?action=getTeams");
    info!("  - /api?action=getTeam&id={{teamId}}");
    info!("  - /api?action=generateLogoVariations&teamId={{id}}");
    info!("  - /api?action=getDesignProfile");
    info!("open http://{addr} in a browser to view the dashboard");
    info!("press Ctrl+C to stop the server");
}

/// Resolve when the process receives an interrupt.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install Ctrl+C handler");
    }
    info!("shutdown signal received");
}
