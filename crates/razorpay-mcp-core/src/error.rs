//! Error types for razorpay-mcp-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for razorpay-mcp-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving configuration or setting up logging
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The home directory could not be determined and no config path was given
    #[error("could not determine home directory for the default config file")]
    HomeDirUnavailable,

    /// A configuration value or file was unusable
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O failure tied to a specific path
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The explicit config file could not be parsed as YAML
    #[error("failed to parse config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: yaml_serde::Error,
    },
}

impl Error {
    /// Build a configuration error from any message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
