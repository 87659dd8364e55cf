//! Error types for binding generation.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::asset::Identifier;

/// Result type for binding generation.
pub type EmitResult<T> = Result<T, EmitError>;

/// Errors that can occur while generating a bindings file.
#[derive(Debug)]
pub enum EmitError {
    /// The category root cannot be expressed as a UTF-8 glob pattern.
    InvalidRoot(PathBuf),

    /// The discovery pattern is invalid.
    InvalidPattern { pattern: String, reason: String },

    /// Two distinct assets normalize to the same identifier.
    DuplicateIdentifier {
        identifier: Identifier,
        first: String,
        second: String,
    },

    /// Failed to create the output directory.
    CreateDirFailed { path: PathBuf, source: io::Error },

    /// Failed to write the output file.
    WriteFailed { path: PathBuf, source: io::Error },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::InvalidRoot(path) => {
                write!(f, "asset root is not valid UTF-8: {}", path.display())
            }
            EmitError::InvalidPattern { pattern, reason } => {
                write!(f, "invalid asset pattern {}: {}", pattern, reason)
            }
            EmitError::DuplicateIdentifier {
                identifier,
                first,
                second,
            } => {
                write!(
                    f,
                    "identifier {} is produced by both {} and {}",
                    identifier, first, second
                )
            }
            EmitError::CreateDirFailed { path, source } => {
                write!(
                    f,
                    "failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            EmitError::WriteFailed { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::CreateDirFailed { source, .. } => Some(source),
            EmitError::WriteFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
