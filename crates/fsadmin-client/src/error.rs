//! Client error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use fsadmin_protocol::{AdminError, AdminResult};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or has wrong value types.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written out as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The logging section is invalid.
    #[error("invalid logging settings: {0}")]
    Logging(#[from] fsadmin_core::TracingError),
}

impl ConfigError {
    /// Creates a read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
