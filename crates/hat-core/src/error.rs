//! Unified error types for the HAT ecosystem
//!
//! This module provides a common error type [`HatError`] that can represent
//! errors from any part of the system. Domain-specific error types can be
//! converted to `HatError` for uniform error handling at API boundaries.
//!
//! # Example
//!
//! ```ignore
//! use hat_core::{HatError, HatResult};
//!
//! fn analyze(path: &str) -> HatResult<()> {
//!     let rows = load_results(path)?;
//!     build_report(&rows)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for all HAT operations.
///
/// This enum provides a common error representation for the HAT ecosystem,
/// allowing errors from I/O, parsing, filtering, and aggregation to be
/// handled uniformly.
#[derive(Error, Debug)]
pub enum HatError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Data validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A filter or aggregation step yielded no comparable data
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using HatError.
pub type HatResult<T> = Result<T, HatError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for HatError {
    fn from(err: anyhow::Error) -> Self {
        HatError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for HatError {
    fn from(s: String) -> Self {
        HatError::Other(s)
    }
}

impl From<&str> for HatError {
    fn from(s: &str) -> Self {
        HatError::Other(s.to_string())
    }
}

// JSON serialization errors
impl From<serde_json::Error> for HatError {
    fn from(err: serde_json::Error) -> Self {
        HatError::Parse(err.to_string())
    }
}
