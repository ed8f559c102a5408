//! Error types for proposalforge library.

use std::io;
use thiserror::Error;

use crate::model::ValidationErrors;

/// Result type alias for proposalforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating or storing proposals.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The deal-context form is missing required fields.
    #[error("Invalid form: {0}")]
    Validation(ValidationErrors),

    /// The agent could not be reached or rejected the request.
    #[error("Agent error: {0}")]
    Agent(String),

    /// Transport error talking to the agent endpoint.
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Key-value store failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// No saved proposal with the given id.
    #[error("Proposal not found: {0}")]
    ProposalNotFound(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error during rendering (text, HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ProposalNotFound("abc123".to_string());
        assert_eq!(err.to_string(), "Proposal not found: abc123");

        let err = Error::Agent("HTTP 502: bad gateway".to_string());
        assert_eq!(err.to_string(), "Agent error: HTTP 502: bad gateway");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
