//! Scoped scratch directory for archive extraction.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{RedistributeError, RedistributeResult};

/// A freshly created directory that is removed when dropped.
///
/// Any leftovers at the path are deleted on creation, so frames from a
/// previous archive can never leak into the next one. Removal on drop runs
/// on success and error paths alike.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Clear `path` if it exists and create it empty.
    pub fn create(path: impl Into<PathBuf>) -> RedistributeResult<Self> {
        let path = path.into();

        match fs::remove_dir_all(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(RedistributeError::CreateDirFailed { path, source: e });
            }
        }

        fs::create_dir_all(&path).map_err(|e| RedistributeError::CreateDirFailed {
            path: path.clone(),
            source: e,
        })?;

        Ok(Self { path })
    }

    /// The scratch directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "Failed to remove scratch directory");
            }
        }
    }
}
