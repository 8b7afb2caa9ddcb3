//! Shared application state for the dashboard API server.
//!
//! [`AppState`] holds the immutable [`TeamCatalog`] loaded at startup.
//! The catalog is read-only for the process lifetime, so no lock guards
//! it -- concurrent handlers read the same `Arc` freely.

use std::sync::Arc;

use gridiron_catalog::TeamCatalog;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The immutable team catalog.
    pub catalog: Arc<TeamCatalog>,
}

impl AppState {
    /// Create application state around a loaded catalog.
    pub fn new(catalog: TeamCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
