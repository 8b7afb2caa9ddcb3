//! Error types for the dashboard API layer.
//!
//! [`ApiError`] unifies the logical failure modes of action handlers.
//! These are not HTTP errors: the dispatcher converts every variant into
//! a failure [`ResponseEnvelope`](gridiron_types::ResponseEnvelope) and
//! the transport still answers 200. The `Display` strings are the exact
//! `error` values clients see.

/// Logical errors raised by action handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `action` parameter was missing or not a recognized action.
    #[error("Invalid action specified")]
    InvalidAction,

    /// No team with the requested identifier exists in the catalog.
    #[error("Team not found")]
    TeamNotFound,

    /// A required query parameter was absent.
    #[error("Missing required parameter: {name}")]
    MissingParam {
        /// Name of the absent parameter.
        name: &'static str,
    },

    /// A numeric query parameter was not a base-10 integer.
    #[error("Invalid integer parameter {name}: {value}")]
    InvalidParam {
        /// Name of the malformed parameter.
        name: &'static str,
        /// The value as received.
        value: String,
    },

    /// A payload failed to serialize.
    #[error("serialization error: {source}")]
    Serialization {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_match_the_wire_contract() {
        assert_eq!(ApiError::InvalidAction.to_string(), "Invalid action specified");
        assert_eq!(ApiError::TeamNotFound.to_string(), "Team not found");
        assert_eq!(
            ApiError::MissingParam { name: "id" }.to_string(),
            "Missing required parameter: id"
        );
        assert_eq!(
            ApiError::InvalidParam {
                name: "teamId",
                value: String::from("abc")
            }
            .to_string(),
            "Invalid integer parameter teamId: abc"
        );
    }
}
