//! Error types for RUVDS API operations.
//!
//! Every operation either fully succeeds with a decoded JSON value or fully
//! fails with exactly one of the variants below. Nothing is retried or
//! swallowed inside the client.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for RUVDS API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The service answered with a non-success status.
    ///
    /// `message` is taken from the `message` field of the failure body when
    /// present; `body` keeps the decoded payload for callers that need more
    /// than the headline.
    #[error("Error: {message}")]
    Api {
        /// Failure message reported by the service.
        message: String,
        /// HTTP status of the failure response.
        status: StatusCode,
        /// Decoded failure body (`Null` when the body was empty or not JSON).
        body: serde_json::Value,
    },

    /// The request never produced an HTTP response (connect failure, timeout,
    /// broken stream).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// A response body that was expected to be JSON could not be decoded.
    #[error("Failed to decode RUVDS response: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Specialized result type for RUVDS operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status of the failure, when the service answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true when the service itself rejected the request.
    #[must_use]
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}
