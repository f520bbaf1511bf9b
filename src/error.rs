// src/error.rs

//! Unified error handling for the notifier application.

use thiserror::Error;

/// Result type alias for notifier operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure (timeout, connection, protocol)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Status endpoint answered with a non-success code
    #[error("status endpoint returned HTTP {code}")]
    Endpoint { code: reqwest::StatusCode },

    /// Response body is not a JSON object
    #[error("API response is not a JSON object")]
    NotAnObject,

    /// Response object has no `homeworks` key
    #[error("API response has no \"homeworks\" key")]
    MissingHomeworks,

    /// `homeworks` is present but not an array
    #[error("\"homeworks\" in the API response is not an array")]
    HomeworksNotAList,

    /// Status value outside the known verdict table
    #[error("unknown homework status \"{0}\"")]
    UnknownStatus(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
