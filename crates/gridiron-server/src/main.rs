//! Dashboard server binary for the Gridiron team catalog.
//!
//! This is the main entry point that wires together configuration, the
//! one-time catalog load, and the HTTP API. The catalog is immutable for
//! the process lifetime; a failed load degrades to an empty catalog so
//! the server stays reachable.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `gridiron-config.yaml` (defaults if absent)
//! 3. Load the team catalog from the JSON fixture
//! 4. Build shared state and start the HTTP server
//! 5. Serve until Ctrl-C, then shut down cleanly

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use gridiron_api::{start_server, AppState, ServerConfig};
use gridiron_catalog::TeamCatalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DashboardConfig;
use crate::error::DashboardError;

/// Default location of the YAML configuration file.
const CONFIG_PATH: &str = "gridiron-config.yaml";

/// Application entry point for the dashboard server.
///
/// # Errors
///
/// Returns an error if configuration parsing fails or the HTTP server
/// cannot bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("gridiron-server starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        teams_file = %config.data.teams_file.display(),
        static_dir = %config.assets.static_dir.display(),
        "Configuration loaded"
    );

    // 3. Load the team catalog. Failures degrade to empty, never fatal.
    let catalog = TeamCatalog::load(&config.data.teams_file);
    info!(team_count = catalog.len(), "Team catalog loaded");

    // 4. Build shared state and start serving.
    let state = Arc::new(AppState::new(catalog));
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
        static_dir: config.assets.static_dir,
    };

    start_server(&server_config, state)
        .await
        .map_err(DashboardError::from)?;

    info!("gridiron-server stopped");
    Ok(())
}

/// Load the YAML configuration, falling back to defaults when the file
/// does not exist. A present-but-malformed file is still a startup error.
fn load_config() -> Result<DashboardConfig, DashboardError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        Ok(DashboardConfig::from_file(path)?)
    } else {
        info!(path = CONFIG_PATH, "config file not found, using defaults");
        Ok(DashboardConfig::default())
    }
}
