//! Axum router construction for the dashboard API.
//!
//! Assembles the API routes and the static-asset fallback into a single
//! [`Router`] with CORS middleware enabled for cross-origin dashboard
//! access.

use std::path::Path;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the dashboard server.
///
/// The router includes:
/// - `GET /api` -- query-string action dispatch
/// - `GET /api.php` -- legacy alias for the same dispatch
/// - everything else -- static files served from `static_dir`
///
/// CORS is configured to allow any origin so the dashboard can be opened
/// from anywhere during development.
pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API dispatch, with the legacy alias kept as a route of its own.
        .route("/api", get(handlers::api_entry))
        .route("/api.php", get(handlers::api_entry))
        // Dashboard assets
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
