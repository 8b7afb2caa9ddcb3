//! Dashboard API server for the Gridiron team catalog.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Action endpoints** (`GET /api` and the legacy alias `GET /api.php`)
//!   dispatching on the `action` query parameter to catalog lookups and
//!   design derivations
//! - **Static-file fallback** serving the dashboard assets for every
//!   other path
//!
//! # Architecture
//!
//! All reads go against the immutable [`TeamCatalog`] loaded at startup
//! and shared via [`AppState`]; handlers never take a lock. Every API
//! response -- success or logical failure -- is an HTTP 200 carrying a
//! pretty-printed [`ResponseEnvelope`], with failures signaled inside the
//! envelope rather than via status codes.
//!
//! [`TeamCatalog`]: gridiron_catalog::TeamCatalog
//! [`ResponseEnvelope`]: gridiron_types::ResponseEnvelope

pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use dispatch::dispatch;
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
