//! Error types for the Promptis CLI.
//!
//! This module defines a unified error enum covering all error categories
//! in the application: configuration, directory scanning, per-file prompt
//! loading, and chat channel failures.

use thiserror::Error;

/// Unified error type for the Promptis CLI.
///
/// All fallible functions in the application return `Result<T, AppError>`.
/// We never panic — errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (unset prompt directory, bad config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory scan errors (whole-scan failures, never per-file)
    #[error("Scan error: {0}")]
    Scan(String),

    /// Per-file prompt load errors, attributable to one file
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Chat channel and provider errors
    #[error("Chat error: {0}")]
    Chat(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
