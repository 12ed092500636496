//! Error types for configuration and update runs

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration lookups
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value is absent or blank
    #[error("Configuration value '{key}' is missing")]
    Missing {
        /// Dotted key that was looked up
        key: String,
    },

    /// The configuration file could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// Create a missing-value error for the given key
    pub fn missing(key: impl Into<String>) -> Self {
        Self::Missing { key: key.into() }
    }

    /// Check if this error is a missing-value error
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

/// Terminal failures of an update run
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Configuration could not be resolved; no phase ran
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Image pull failed; services were left untouched
    #[error("Failed to pull images: {0}")]
    PullFailed(String),

    /// Service start failed after images were pulled
    #[error("Failed to start services: {0}")]
    StartFailed(String),
}
