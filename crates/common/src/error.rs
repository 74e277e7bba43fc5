//! Error types for fanout-rs.

use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// A remote document or IRI was structurally unusable.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A dereference or delivery against a remote server failed.
    #[error("Federation error: {0}")]
    Federation(String),

    /// A remote payload could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be loaded or was invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Anything else.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns whether this error indicates a fault on our side rather
    /// than in remote input.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Internal(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
