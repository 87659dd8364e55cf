//! Centralized naming rules for generated bindings.
//!
//! This module is the single source of truth for the names written into the
//! generated file:
//! - Binding identifiers (e.g., `ocean_deep_angler_sprite`)
//! - Group keys (e.g., `ocean_deep`)
//!
//! Both are built by flattening path segments with `_` after replacing every
//! `-` with `_`. No case folding is performed.

use std::fmt;

use super::AssetPath;

/// Separator used when flattening segments into identifiers and group keys.
pub const SEPARATOR: char = '_';

/// A generated binding name, unique within its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap an already synthesized identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A flattened directory chain used to bucket assets into groups.
///
/// The empty key is the root group: assets that live directly under the
/// category root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey(String);

impl GroupKey {
    /// The root group key.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Wrap an already flattened key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the root group.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Strict prefixes of this key, shortest first.
    ///
    /// The key is split on [`SEPARATOR`]; a key with `n` pieces yields the
    /// prefixes made of the first `1..n-1` pieces. The root key yields none.
    ///
    /// ```
    /// use assetbind::asset::GroupKey;
    ///
    /// let key = GroupKey::new("ocean_deep_trench");
    /// let ancestors: Vec<String> = key
    ///     .ancestors()
    ///     .iter()
    ///     .map(|k| k.as_str().to_string())
    ///     .collect();
    /// assert_eq!(ancestors, vec!["ocean", "ocean_deep"]);
    /// ```
    pub fn ancestors(&self) -> Vec<GroupKey> {
        let pieces: Vec<&str> = self.0.split(SEPARATOR).collect();
        (1..pieces.len())
            .map(|len| GroupKey(pieces[..len].join("_")))
            .collect()
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace every `-` with `_`.
pub fn normalize_segment(segment: &str) -> String {
    segment.replace('-', "_")
}

/// Synthesize the binding identifier for an asset.
///
/// The file name is replaced by its stem, every segment is normalized and
/// the segments are joined with `_`, followed by `_` and `suffix`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use assetbind::asset::{synthesize, AssetPath};
///
/// let path = AssetPath::new(
///     Path::new("assets/sprites"),
///     Path::new("ocean/deep-sea/angler-fish.png"),
/// )
/// .unwrap();
/// assert_eq!(synthesize(&path, "sprite").as_str(), "ocean_deep_sea_angler_fish_sprite");
/// ```
pub fn synthesize(path: &AssetPath, suffix: &str) -> Identifier {
    let mut parts: Vec<String> = path
        .directories()
        .iter()
        .map(|segment| normalize_segment(segment))
        .collect();
    parts.push(normalize_segment(path.file_stem()));

    Identifier(format!("{}{}{}", parts.join("_"), SEPARATOR, suffix))
}

/// Derive the group key for an asset from its directory segments.
///
/// Returns the root key for assets directly under the category root.
///
/// ```
/// use std::path::Path;
/// use assetbind::asset::{group_key, AssetPath};
///
/// let nested = AssetPath::new(Path::new("assets/sprites"), Path::new("ocean/deep-sea/a.png")).unwrap();
/// assert_eq!(group_key(&nested).as_str(), "ocean_deep_sea");
///
/// let top = AssetPath::new(Path::new("assets/sprites"), Path::new("a.png")).unwrap();
/// assert!(group_key(&top).is_root());
/// ```
pub fn group_key(path: &AssetPath) -> GroupKey {
    let parts: Vec<String> = path
        .directories()
        .iter()
        .map(|segment| normalize_segment(segment))
        .collect();
    GroupKey(parts.join("_"))
}
