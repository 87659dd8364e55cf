//! Error types for archive redistribution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for redistribution operations.
pub type RedistributeResult<T> = Result<T, RedistributeError>;

/// Errors that can occur while redistributing frame archives.
#[derive(Debug, Error)]
pub enum RedistributeError {
    /// The archive name is not of the form `<class>-<stage>`.
    #[error("malformed archive name: {0}")]
    MalformedName(String),

    /// The stage token has no variant multiplier.
    #[error("unknown stage '{stage}' in archive {archive}")]
    UnknownStage { archive: String, stage: String },

    /// A frame file name is not `<index>.png`.
    #[error("invalid frame name '{name}' in {}", .archive.display())]
    InvalidFrameName { archive: PathBuf, name: String },

    /// Two frame files resolve to the same index (e.g. `0.png` and `00.png`).
    #[error("frame {index} appears more than once in {}", .archive.display())]
    DuplicateFrame { archive: PathBuf, index: u32 },

    /// The archive could not be read or unpacked.
    #[error("failed to extract {}: {reason}", .path.display())]
    ExtractionFailed { path: PathBuf, reason: String },

    /// Failed to read a file or directory.
    #[error("failed to read {}: {source}", .path.display())]
    ReadFailed { path: PathBuf, source: io::Error },

    /// Failed to create a directory.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDirFailed { path: PathBuf, source: io::Error },

    /// Failed to move a frame into place.
    #[error("failed to move {} to {}: {source}", .from.display(), .to.display())]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}
