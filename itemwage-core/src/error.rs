/// Structured error types for itemwage-core.
///
/// The CLI wraps these in `anyhow` for context; library consumers
/// get the concrete variants.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for itemwage-core operations
#[derive(Error, Debug)]
pub enum ItemwageError {
    /// Config file could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    /// Config file is not valid TOML or has the wrong shape
    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config parsed but carries values outside their allowed range
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Result type alias for itemwage-core operations
pub type Result<T> = std::result::Result<T, ItemwageError>;

impl ItemwageError {
    /// Create an invalid config error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
