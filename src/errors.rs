//! Shared error types for the library
//!
//! Classification itself never fails. Everything here concerns setting up a
//! [`Classifier`](crate::Classifier): cache sizing and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wvalidate operations
#[derive(Debug, Error)]
pub enum Error {
    /// A cache was asked to hold zero entries
    #[error("Invalid cache capacity {0}: capacity must be at least 1")]
    InvalidCapacity(usize),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`ValidateConfig`](crate::ValidateConfig)
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// IO errors while writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON rendering errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a config read error with path context
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
