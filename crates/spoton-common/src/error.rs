//! Errors

use thiserror::Error;

/// Errors surfaced by the client SDK
///
/// The three wire-failure kinds ([`Error::AuthExpired`], [`Error::Api`],
/// [`Error::Transport`]) are structurally distinguishable so callers can
/// branch on them without inspecting message strings.
#[derive(Debug, Error)]
pub enum Error {
    /// Session token rejected by the server (HTTP 401)
    #[error("Authentication expired")]
    AuthExpired,
    /// Application-level failure carried in the response envelope
    #[error("API error ({code}): {message}")]
    Api {
        /// Envelope error code (non-zero)
        code: i64,
        /// Human readable description
        message: String,
    },
    /// Network-level transport failure
    #[error("Transport error: {0}")]
    Transport(String),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Invalid URL
    #[error(transparent)]
    Url(#[from] url::ParseError),
    /// Token persistence failure
    #[error("Storage error: {0}")]
    Storage(String),
    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_expired_display() {
        assert_eq!(format!("{}", Error::AuthExpired), "Authentication expired");
    }

    #[test]
    fn test_api_error_display() {
        let error = Error::Api {
            code: 4001,
            message: "team name taken".to_string(),
        };
        assert_eq!(format!("{}", error), "API error (4001): team name taken");
    }

    #[test]
    fn test_transport_error_display() {
        let error = Error::Transport("connection refused".to_string());
        assert_eq!(format!("{}", error), "Transport error: connection refused");
    }

    #[test]
    fn test_from_serde_json_error() {
        let result: Result<String, _> = serde_json::from_str("not valid json");
        let json_error = result.expect_err("Invalid JSON should produce an error");
        let error: Error = json_error.into();

        assert!(matches!(error, Error::Serialization(_)));
    }
}
