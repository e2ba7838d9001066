//! Promptis Core Library
//!
//! This crate provides the foundational utilities for the Promptis CLI:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management (the `promptDirectory` setting and friends)

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};
