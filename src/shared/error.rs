//! Client Error Types
//!
//! Errors produced while talking to the notes server or writing exports.
//!
//! # Error Categories
//!
//! - `Transport` - the request never produced an HTTP response
//! - `Status` - the server answered with a non-success status
//! - `Decode` - the response body was not what the endpoint promises
//! - `Io` - local file system failures (exports)
//!
//! # Usage
//!
//! ```rust
//! use liggs::shared::error::ClientError;
//!
//! let error = ClientError::status(401, Some("Invalid credentials".to_string()));
//! assert_eq!(error.server_message(), Some("Invalid credentials"));
//! ```
use thiserror::Error;

/// Errors returned by the notes API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, TLS, or timeout failure
    #[error("Network error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
    },

    /// Non-2xx HTTP status
    #[error("Request failed with status {status}{}", suffix(.message))]
    Status {
        /// HTTP status code
        status: u16,
        /// `error` field of the response body, when the server sent one
        message: Option<String>,
    },

    /// Response body could not be decoded
    #[error("Failed to parse response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    /// Local I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new status error
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// The server-provided explanation, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

fn suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

pub type ClientResult<T> = Result<T, ClientError>;
