//! Validated asset paths relative to a category root.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while turning a filesystem path into an [`AssetPath`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetPathError {
    /// A path component is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8(PathBuf),

    /// The path does not live under the category root.
    #[error("{} is not under {}", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// The relative path contains `..`, a root or a drive prefix.
    #[error("path must be a plain relative path: {}", .0.display())]
    NotRelative(PathBuf),

    /// The relative path has no file name.
    #[error("path has no file name: {}", .0.display())]
    Empty(PathBuf),
}

/// A discovered asset file, relative to its category root.
///
/// Ordering compares segment by segment, which matches the component-wise
/// ordering of [`Path`] and keeps discovery deterministic across platforms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetPath {
    /// Segments relative to the category root; the last one is the file name.
    segments: Vec<String>,

    /// Root-prefixed posix form written into the generated output.
    display: String,
}

impl AssetPath {
    /// Build an asset path from a category root and a path relative to it.
    pub fn new(root: &Path, relative: &Path) -> Result<Self, AssetPathError> {
        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    let part = part
                        .to_str()
                        .ok_or_else(|| AssetPathError::NonUtf8(relative.to_path_buf()))?;
                    segments.push(part.to_string());
                }
                Component::CurDir => {}
                _ => return Err(AssetPathError::NotRelative(relative.to_path_buf())),
            }
        }

        if segments.is_empty() {
            return Err(AssetPathError::Empty(relative.to_path_buf()));
        }

        let root_posix = posix_root(root)?;
        let joined = segments.join("/");
        let display = if root_posix.is_empty() {
            joined
        } else if root_posix.ends_with('/') {
            format!("{}{}", root_posix, joined)
        } else {
            format!("{}/{}", root_posix, joined)
        };

        Ok(Self { segments, display })
    }

    /// Build an asset path from a full path found underneath `root`.
    ///
    /// `.` components are ignored on both sides, so a root of `.` or `./`
    /// matches paths reported without the leading `./`.
    pub fn from_full(root: &Path, full: &Path) -> Result<Self, AssetPathError> {
        let relative = without_cur_dir(full);
        let relative = relative
            .strip_prefix(without_cur_dir(root))
            .map_err(|_| AssetPathError::OutsideRoot {
                path: full.to_path_buf(),
                root: root.to_path_buf(),
            })?;
        Self::new(root, relative)
    }

    /// All segments relative to the category root.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Directory segments, excluding the file name.
    pub fn directories(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The file name, including its extension.
    pub fn file_name(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// The file name with its final extension stripped.
    pub fn file_stem(&self) -> &str {
        let name = self.file_name();
        Path::new(name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(name)
    }

    /// Root-prefixed posix path, e.g. `assets/sprites/ocean/fish.png`.
    pub fn display_path(&self) -> &str {
        &self.display
    }

    /// Whether any segment equals `marker`.
    pub fn has_segment(&self, marker: &str) -> bool {
        self.segments.iter().any(|segment| segment == marker)
    }
}

/// Drop `.` components; a path made only of them becomes empty.
pub fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Render a category root with `/` separators and without `.` components.
fn posix_root(root: &Path) -> Result<String, AssetPathError> {
    let mut parts = Vec::new();
    let mut absolute = false;

    for component in root.components() {
        match component {
            Component::RootDir => absolute = true,
            Component::CurDir => {}
            Component::ParentDir => parts.push(".."),
            Component::Normal(part) => parts.push(
                part.to_str()
                    .ok_or_else(|| AssetPathError::NonUtf8(root.to_path_buf()))?,
            ),
            Component::Prefix(prefix) => parts.push(
                prefix
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| AssetPathError::NonUtf8(root.to_path_buf()))?,
            ),
        }
    }

    let joined = parts.join("/");
    Ok(if absolute {
        format!("/{}", joined)
    } else {
        joined
    })
}
