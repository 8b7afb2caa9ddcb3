//! The success/failure wrapper returned by every API call.
//!
//! [`ResponseEnvelope`] is the sole unit exchanged across the HTTP
//! boundary. Logical failures (unknown action, team not found, malformed
//! parameter) travel inside the envelope with `success: false`; the HTTP
//! status stays 200 either way.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Tagged success/failure wrapper carrying a payload or an error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    /// Whether the requested action succeeded.
    pub success: bool,
    /// Action payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Human-readable error message, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Generation time in ISO-8601.
    pub timestamp: DateTime<Utc>,
}

impl ResponseEnvelope {
    /// Wrap a payload in a success envelope stamped with the current time.
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Wrap an error message in a failure envelope stamped with the
    /// current time.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn success_envelope_omits_error_key() {
        let envelope = ResponseEnvelope::ok(serde_json::json!({"teams": []}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], true);
        assert!(value.get("error").is_none());
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn failure_envelope_omits_data_key() {
        let envelope = ResponseEnvelope::failure("Team not found");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Team not found");
        assert!(value.get("data").is_none());
    }
}
