use thiserror::Error;

/// Unified error type for the writekit runtime.
/// This aggregates all low-level failures into actionable, high-level categories.
///
/// Feature functions never let these escape to presentation code. They catch
/// at their own boundary and convert into the error-shaped variant of
/// [`NormalizedResult`](crate::types::NormalizedResult), so callers always
/// receive a renderable value.
#[derive(Debug, Error)]
pub enum Error {
    /// A required credential or setting is missing. Fatal before any request
    /// is attempted.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Connection-level failure talking to the completion endpoint.
    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    /// The completion endpoint answered with a non-success status. The body
    /// text is preserved so rate-limit and auth details survive.
    #[error("Remote error: HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    /// A 2xx response that carried no message content to hand back.
    #[error("Completion response contained no message content")]
    MissingContent,

    /// No extraction stage produced valid JSON from the model output.
    /// Recoverable: structured features substitute documented fallbacks.
    #[error("Model output is not valid JSON: {reason}")]
    MalformedResponse { reason: String },

    /// The captions collaborator has no transcript for the requested video.
    /// The message is user-facing and passes through unchanged.
    #[error("{0}")]
    TranscriptUnavailable(String),

    /// Caller-supplied input was rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Low-level HTTP transport failures.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Whether this is the recoverable parse-stage failure that structured
    /// features fall back from instead of reporting.
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Error::MalformedResponse { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::Http(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_preserves_status_and_body() {
        let err = Error::Remote {
            status: 429,
            message: "Rate limit reached for model".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("Rate limit reached"));
    }

    #[test]
    fn transcript_unavailable_passes_message_through() {
        let err = Error::TranscriptUnavailable("No transcript available for this video.".into());
        assert_eq!(err.to_string(), "No transcript available for this video.");
    }

    #[test]
    fn malformed_response_is_recoverable_marker() {
        let err = Error::MalformedResponse {
            reason: "expected value at line 1".into(),
        };
        assert!(err.is_malformed_response());
        assert!(!Error::MissingContent.is_malformed_response());
    }
}
