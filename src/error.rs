//! Error types for the contact form client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when submitting the form to the server.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Server answered with a status outside the accepted range
    #[error("Form submission failed (status {status}): {status_text}")]
    Status { status: u16, status_text: String },

    /// The configured endpoint is not a valid URL
    #[error("Invalid submit URL {0}")]
    InvalidUrl(String),

    /// The request never completed
    #[error("POST form request failed: {0}")]
    Transport(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Failed to serialize the payload
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The blocking request task panicked or was cancelled
    #[error("Submission task failed: {0}")]
    Task(String),
}

impl SubmitError {
    /// Status code carried by a server rejection, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by the form state holder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Input name does not map to any form field
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
