/// Structured error types for toyscout-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (toyscout-cli) can still use `anyhow` for
/// convenience, but library consumers get structured errors.
///
/// The two JSON decode stages are kept distinct: `Envelope` means the
/// provider sent something that is not a chat-completions response,
/// `Payload` means the model's answer text is not the expected JSON
/// document. Conflating them would hide which side misbehaved.

use thiserror::Error;

/// Main error type for toyscout-core operations
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Provider returned a non-success HTTP status
    #[error("API request failed ({status}): {body}")]
    Http { status: u16, body: String },

    /// Connection or request transport failure
    #[error("transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// Stage one: response body is not a valid chat-completions envelope
    #[error("invalid response envelope: {source}")]
    Envelope { source: serde_json::Error },

    /// Envelope parsed but contained no answer message
    #[error("response contained no choices")]
    EmptyChoices,

    /// Stage two: embedded answer text is not a valid toy-info document
    #[error("invalid toy info payload: {source}")]
    Payload { source: serde_json::Error },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for toyscout-core operations
pub type Result<T> = std::result::Result<T, ScoutError>;

impl ScoutError {
    /// Create an HTTP status error
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create a stage-one envelope decode error
    pub fn envelope(source: serde_json::Error) -> Self {
        Self::Envelope { source }
    }

    /// Create a stage-two payload decode error
    pub fn payload(source: serde_json::Error) -> Self {
        Self::Payload { source }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScoutError::http(401, "unauthorized");
        assert_eq!(err.to_string(), "API request failed (401): unauthorized");

        let err = ScoutError::config("no API key set");
        assert!(err.to_string().contains("no API key set"));
    }

    #[test]
    fn test_decode_stages_are_distinct() {
        let bad = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let outer = ScoutError::envelope(bad);
        let bad = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let inner = ScoutError::payload(bad);

        assert!(matches!(outer, ScoutError::Envelope { .. }));
        assert!(matches!(inner, ScoutError::Payload { .. }));
        assert!(outer.to_string().starts_with("invalid response envelope"));
        assert!(inner.to_string().starts_with("invalid toy info payload"));
    }
}
