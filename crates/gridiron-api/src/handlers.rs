//! HTTP endpoint handlers for the dashboard API.
//!
//! A single handler serves both `/api` and its legacy alias `/api.php`:
//! it hands the parsed query parameters to the dispatcher and renders the
//! resulting envelope. API responses are always HTTP 200 with a
//! pretty-printed JSON body; logical failures live inside the envelope.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use gridiron_types::ResponseEnvelope;

use crate::dispatch::dispatch;
use crate::state::AppState;

/// Serve one API request.
///
/// Routed from both `/api` and `/api.php`; the alias exists for
/// compatibility with a prior implementation and has no other behavior.
pub async fn api_entry(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let envelope = dispatch(&state.catalog, &params);
    render_envelope(&envelope)
}

/// Render an envelope as a pretty-printed JSON response.
///
/// Status is 200 even for failure envelopes. The fallback body only
/// fires if envelope serialization itself fails, which no payload the
/// dispatcher produces can trigger.
fn render_envelope(envelope: &ResponseEnvelope) -> Response {
    let body = serde_json::to_string_pretty(envelope).unwrap_or_else(|error| {
        tracing::error!(%error, "envelope serialization failed");
        String::from(
            "{\n  \"success\": false,\n  \"error\": \"Internal serialization error\"\n}",
        )
    });

    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn rendered_body_is_pretty_printed() {
        let response = render_envelope(&ResponseEnvelope::failure("Team not found"));
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }
}
