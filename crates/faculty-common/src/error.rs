//! Error types shared by the faculty loader crates

use thiserror::Error;

/// Result type alias for faculty loader operations
pub type Result<T> = std::result::Result<T, FacultyError>;

/// Main error type for the faculty loader
#[derive(Error, Debug)]
pub enum FacultyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Store rejected request ({status}): {message}")]
    Store { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FacultyError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a store error from a response status and body
    pub fn store(status: u16, message: impl Into<String>) -> Self {
        Self::Store {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
