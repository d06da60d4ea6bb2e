//! Error types for the log source and config layers.
//!
//! The colorizer itself has no error path: malformed escape sequences
//! become text and unknown SGR parameters are ignored.

use std::path::PathBuf;

/// Errors that can occur while acquiring a log.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Log file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read log '{locator}': {source}")]
    Read {
        locator: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
