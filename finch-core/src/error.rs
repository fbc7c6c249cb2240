//! Error types for finch.
//!
//! Two families live here. [`FinchError`] covers initialization and
//! configuration failures exchanged between collaborators. [`UpstreamError`]
//! is the structured error the upstream client reports for a failed API
//! call, carrying the upstream taxonomy's numeric code; the facade inspects
//! that code to decide whether an identifier is a confirmed miss.

use thiserror::Error;

use crate::constants::{NOT_FOUND_CODE, TRANSPORT_CODE};

/// Result type alias using `FinchError`.
pub type Result<T> = std::result::Result<T, FinchError>;

/// Result type alias for upstream API calls.
pub type UpstreamResult<T> = std::result::Result<T, UpstreamError>;

/// Errors raised during initialization and configuration.
#[derive(Debug, Error)]
pub enum FinchError {
    // ═══════════════════════════════════════════════════════════════════════════
    // SECRETS ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// No credential configuration is installed at all.
    #[error("No credentials configured")]
    SecretsUnavailable,

    /// The secrets store failed while loading.
    #[error("Secrets store failure: {0}")]
    Secrets(String),

    /// A required credential field resolved to nothing.
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    // ═══════════════════════════════════════════════════════════════════════════
    // CLIENT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// The upstream HTTP client could not be constructed.
    #[error("Client construction failed: {0}")]
    ClientConstruction(String),

    /// A configured URL did not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // LIFECYCLE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// Initialization was invoked a second time; the latch admits one
    /// attempt per process lifetime.
    #[error("Initialization already attempted")]
    AlreadyInitialized,

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Structured error reported by the upstream API client.
///
/// `code` is the upstream taxonomy's numeric error code, or
/// [`TRANSPORT_CODE`] when the failure never produced one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Upstream error {code}: {message}")]
pub struct UpstreamError {
    /// Numeric error code from the upstream taxonomy.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
}

impl UpstreamError {
    /// Creates an error with an explicit upstream code.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a transport-level error (no upstream code available).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(TRANSPORT_CODE, message)
    }

    /// Returns true if the upstream confirmed the identifier does not exist.
    ///
    /// Only this condition may be remembered by the miss cache.
    pub fn is_not_found(&self) -> bool {
        self.code == NOT_FOUND_CODE
    }

    /// Returns true if the failure never reached the upstream taxonomy.
    pub fn is_transport(&self) -> bool {
        self.code == TRANSPORT_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(UpstreamError::new(34, "user not found").is_not_found());
        assert!(!UpstreamError::new(88, "rate limit exceeded").is_not_found());
        assert!(!UpstreamError::transport("connection refused").is_not_found());
    }

    #[test]
    fn test_transport_classification() {
        assert!(UpstreamError::transport("timed out").is_transport());
        assert!(!UpstreamError::new(34, "user not found").is_transport());
    }

    #[test]
    fn test_error_display() {
        let err = UpstreamError::new(34, "Sorry, that page does not exist");
        assert!(err.to_string().contains("34"));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("invalid");
        let converted: Result<serde_json::Value> = parsed.map_err(FinchError::from);
        assert!(matches!(converted, Err(FinchError::Json(_))));
    }
}
