//! Error types for notekeep.
//!
//! There is no not-found variant: API operations that can
//! target a missing note report it as `Ok(None)` or `Ok(false)`.

use thiserror::Error;

/// Result type alias using notekeep's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notekeep operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP/network request failed before a response arrived
    #[error("Request error: {0}")]
    Request(String),

    /// Backend answered with an unexpected status
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status carried by the error, if the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
