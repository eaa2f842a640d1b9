//! Client Error Types
//!
//! This module defines the error type returned by every fallible operation in
//! the client: API calls, persisted storage, and local form checks.
//!
//! # Error Categories
//!
//! - `Network` - transport failure (connection refused, timeout, ...)
//! - `Unauthorized` - the backend rejected the bearer token
//! - `Backend` - a non-2xx response carrying a user-facing `detail`
//! - `Decode` - a response body that is not the expected JSON
//! - `Validation` - a form field rejected before any request is made
//! - `Storage` - reading or writing the persisted token/theme failed
//!
//! Empty results are not errors; they are valid states with their own
//! empty-state render.
//!
//! # Usage
//!
//! ```rust
//! use shopagent::shared::error::ClientError;
//!
//! let error = ClientError::validation("email", "Email is required");
//! assert_eq!(error.user_message(), "Email is required");
//! ```
use thiserror::Error;

/// Errors produced by the shop client
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// The session token was missing, invalid or expired
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Non-2xx response with a message sourced from the backend
    #[error("Request failed ({status}): {message}")]
    Backend {
        /// HTTP status code
        status: u16,
        /// Message taken verbatim from the response `detail`
        message: String,
    },

    /// Unexpected response body
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Local validation failure
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Persisted storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// The async runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl ClientError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new backend error
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Message suitable for showing inline in a form.
    ///
    /// Backend and validation messages are surfaced unchanged; transport
    /// failures keep their full description.
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend { message, .. } | Self::Validation { message, .. } => message.clone(),
            Self::Unauthorized(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Create a runtime start-up error
    pub fn runtime(err: std::io::Error) -> Self {
        Self::Runtime(err.to_string())
    }

    /// Whether the failure happened before the backend answered
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
