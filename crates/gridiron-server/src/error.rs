//! Error types for the dashboard server binary.
//!
//! [`DashboardError`] is the top-level error type that wraps the failure
//! modes of startup and serving, providing a single type `main` can
//! propagate with `?`. Catalog data problems are deliberately absent:
//! those degrade to an empty catalog instead of failing startup.

/// Top-level error for the dashboard server binary.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: gridiron_api::ServerError,
    },
}
