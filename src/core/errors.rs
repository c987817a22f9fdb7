//! Custom error types for API calls

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::core::models::RemoteError;

/// Why a pending call ended up cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelCause {
    /// The per-call timeout elapsed before the exchange completed
    Timeout(Duration),
    /// The caller's cancellation token was observed
    Signal,
}

impl fmt::Display for CancelCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelCause::Timeout(_) => write!(f, "A task was canceled."),
            CancelCause::Signal => write!(f, "The operation was canceled."),
        }
    }
}

/// Errors raised by the translate client
#[derive(Error, Debug)]
pub enum TranslateError {
    /// A required request field is missing or empty
    #[error("{field} is required")]
    Validation {
        field: &'static str,
    },

    /// The service answered with a non-success status
    #[error("Response status code does not indicate success: {status} ({reason}).")]
    Service {
        status: u16,
        reason: String,
        remote: Option<RemoteError>,
    },

    /// Timeout or external cancellation won the race against the exchange
    #[error("{0}")]
    Cancelled(CancelCause),

    /// Network error
    #[error("Network error: {message}")]
    Network {
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponse {
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    /// Background task failed without producing a result
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranslateError {
    pub(crate) fn required(field: &'static str) -> Self {
        TranslateError::Validation { field }
    }

    /// HTTP status carried by a service error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TranslateError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for both timeouts and observed cancellation signals
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TranslateError::Cancelled(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, TranslateError::Validation { .. })
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TranslateError::InvalidResponse {
                message: err.to_string(),
            }
        } else {
            TranslateError::Network {
                message: err.to_string(),
            }
        }
    }
}

impl From<anyhow::Error> for TranslateError {
    fn from(err: anyhow::Error) -> Self {
        TranslateError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type for translate operations
pub type Result<T> = std::result::Result<T, TranslateError>;
