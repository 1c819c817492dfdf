//! Error types for UI services.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for UI service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from UI service operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No dataset is currently loaded.
    #[error("no dataset loaded")]
    NoDatasetLoaded,

    /// Every automatic load attempt failed or parsed to zero rows; the
    /// boundary must ask the user to pick a file explicitly.
    #[error("automatic load failed for {}; a file must be selected manually", format_attempts(attempted))]
    ManualSelectionRequired { attempted: Vec<PathBuf> },

    /// Failed to load a results file.
    #[error("failed to load results from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_attempts(attempted: &[PathBuf]) -> String {
    attempted
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
