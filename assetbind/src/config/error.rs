//! Configuration error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid INI.
    #[error("failed to parse config file: {0}")]
    Parse(String),

    /// A section the tool does not know about.
    #[error("unknown config section [{0}]")]
    UnknownSection(String),

    /// A required key is missing.
    #[error("missing key '{key}' in section [{section}]")]
    MissingKey { section: String, key: String },

    /// A key has a value of the wrong form.
    #[error("invalid value '{value}' for '{key}' in section [{section}]")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },

    /// No category with this name is configured.
    #[error("unknown asset category: {0}")]
    UnknownCategory(String),
}
