//! Error types for the FoxESS bridge.
//!
//! Centralized error handling using thiserror. The `Display` renderings of
//! the dispatch-facing variants double as the `error` descriptions callers
//! see in an ApiResult, so the wording here is part of the contract.

use thiserror::Error;

/// All error types that can occur in the bridge
#[derive(Debug, Error)]
pub enum FoxEssError {
    /// No API key was configured at startup
    #[error("API credentials are not configured.")]
    MissingCredential,

    /// Remote returned a non-2xx status
    #[error("HTTP Error: {status} {message}")]
    Http { status: u16, message: String },

    /// Could not establish or complete the connection
    #[error("Error Connecting: {0}")]
    Connection(String),

    /// No response within the transport timeout
    #[error("Timeout Error: {0}")]
    Timeout(String),

    /// Any other transport-level failure
    #[error("An unexpected error occurred: {0}")]
    Transport(String),

    /// HTTP client construction failed
    #[error("Client error: {0}")]
    Client(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, FoxEssError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_error() {
        let err = FoxEssError::MissingCredential;
        assert_eq!(err.to_string(), "API credentials are not configured.");
    }

    #[test]
    fn test_http_error() {
        let err = FoxEssError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP Error: 500 Internal Server Error");
    }

    #[test]
    fn test_connection_error() {
        let err = FoxEssError::Connection("connection refused".to_string());
        assert_eq!(err.to_string(), "Error Connecting: connection refused");
    }

    #[test]
    fn test_timeout_error() {
        let err = FoxEssError::Timeout("operation timed out".to_string());
        assert_eq!(err.to_string(), "Timeout Error: operation timed out");
    }

    #[test]
    fn test_transport_error() {
        let err = FoxEssError::Transport("error decoding response body".to_string());
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred: error decoding response body"
        );
    }

    #[test]
    fn test_client_error() {
        let err = FoxEssError::Client("builder failure".to_string());
        assert_eq!(err.to_string(), "Client error: builder failure");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FoxEssError = io_err.into();
        assert!(matches!(err, FoxEssError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(FoxEssError::MissingCredential)
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
