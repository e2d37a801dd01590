//! Unified error types for the AQI toolkit
//!
//! This module provides a common error type [`AqiError`] that can represent
//! errors from any part of the system. Domain-specific error types can be
//! converted to `AqiError` for uniform error handling at API boundaries.
//!
//! # Example
//!
//! ```ignore
//! use aqi_core::{AqiError, AqiResult};
//!
//! fn score_city(path: &str) -> AqiResult<()> {
//!     let dataset = load_dataset(path)?;
//!     rank_cities(&dataset)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for all AQI toolkit operations.
///
/// Allows errors from I/O, parsing, dataset validation, model inference,
/// and chart rendering to be handled uniformly.
#[derive(Error, Debug)]
pub enum AqiError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Dataset validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Model artifact or inference errors
    #[error("Model error: {0}")]
    Model(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using AqiError.
pub type AqiResult<T> = Result<T, AqiError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for AqiError {
    fn from(err: anyhow::Error) -> Self {
        AqiError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for AqiError {
    fn from(s: String) -> Self {
        AqiError::Other(s)
    }
}

impl From<&str> for AqiError {
    fn from(s: &str) -> Self {
        AqiError::Other(s.to_string())
    }
}
