//! Error types for the person mirror.
//!
//! Transport failures and non-2xx responses both end up here. The mirror
//! never mutates its local list when an operation fails, but the error is
//! still handed back through [`PendingOperation`](crate::mirror::PendingOperation)
//! so callers can tell a failure apart from an operation still in flight.

use thiserror::Error;

/// Main error type for the person mirror.
#[derive(Debug, Error)]
pub enum MirrorError {
    // Transport errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("Request timed out: {0}")]
    Timeout(String),

    // Server-reported errors
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Person has no id, cannot {operation}")]
    MissingId { operation: &'static str },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Runtime error: {message}")]
    Runtime { message: String },
}

/// Result type alias for mirror operations.
pub type Result<T> = std::result::Result<T, MirrorError>;

impl From<serde_json::Error> for MirrorError {
    fn from(err: serde_json::Error) -> Self {
        MirrorError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for MirrorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MirrorError::Timeout(err.to_string())
        } else if let Some(status) = err.status() {
            MirrorError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else if err.is_decode() {
            MirrorError::Json {
                message: err.to_string(),
                source: None,
            }
        } else {
            MirrorError::Network {
                message: err.to_string(),
                cause: std::error::Error::source(&err).map(|s| s.to_string()),
            }
        }
    }
}

impl From<url::ParseError> for MirrorError {
    fn from(err: url::ParseError) -> Self {
        MirrorError::Config {
            message: format!("Invalid URL: {}", err),
        }
    }
}

impl MirrorError {
    /// HTTP status code reported by the server, if the failure came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            MirrorError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the server answered with a 5xx status.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(code) if (500..600).contains(&code))
    }

    /// Check if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, MirrorError::Network { .. } | MirrorError::Timeout(_))
    }
}
