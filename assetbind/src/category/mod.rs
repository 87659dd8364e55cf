//! Asset categories.
//!
//! A category describes one family of assets the generator handles: where
//! the files live, which extension they carry, how their identifiers end and
//! how the generated file for them looks. Two categories are built in,
//! [`AssetCategory::sprites`] and [`AssetCategory::fonts`]; more can be
//! declared in the configuration file.

use std::path::PathBuf;

use crate::asset::{AssetPath, GroupKey, Identifier};

/// Name of the built-in sprite category.
pub const SPRITES: &str = "sprites";

/// Name of the built-in font category.
pub const FONTS: &str = "fonts";

/// Directory holding raw sprite archives, never embedded.
pub const ZIPS_MARKER: &str = "_zips";

/// Settings for one asset category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCategory {
    /// Category name used on the command line (e.g., "sprites").
    pub name: String,

    /// Directory scanned for assets.
    pub root: PathBuf,

    /// File extension of assets, without the dot.
    pub extension: String,

    /// Identifier suffix (e.g., "sprite" produces `..._sprite`).
    pub suffix: String,

    /// Path segments that exclude an asset when present.
    pub exclusions: Vec<String>,

    /// Header comment written at the top of the generated file.
    pub header: String,

    /// Whether group lists are written after the bindings.
    pub emit_groups: bool,

    /// Prefix prepended to every binding name in the output.
    pub binding_prefix: String,
}

impl AssetCategory {
    /// Create a category with the default output settings.
    pub fn new(
        name: impl Into<String>,
        root: impl Into<PathBuf>,
        extension: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        let suffix = suffix.into();
        Self {
            name: name.into(),
            root: root.into(),
            extension: extension.into(),
            header: format!("(** Auto-generated {} blobs *)", suffix),
            suffix,
            exclusions: Vec::new(),
            emit_groups: true,
            binding_prefix: String::new(),
        }
    }

    /// The sprite category: `assets/sprites/**/*.png`, skipping `_zips`.
    pub fn sprites() -> Self {
        let mut category = Self::new(SPRITES, "assets/sprites", "png", "sprite");
        category.exclusions = vec![ZIPS_MARKER.to_string()];
        category
    }

    /// The font category: `assets/fonts/**/*.ttf`.
    ///
    /// Font bindings are prefixed with `_` so unused fonts do not raise
    /// warnings downstream, and no group lists are written.
    pub fn fonts() -> Self {
        let mut category = Self::new(FONTS, "assets/fonts", "ttf", "font");
        category.header = "(** Fonts - Auto-generated font blobs *)".to_string();
        category.emit_groups = false;
        category.binding_prefix = "_".to_string();
        category
    }

    /// Look up a built-in category by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            SPRITES => Some(Self::sprites()),
            FONTS => Some(Self::fonts()),
            _ => None,
        }
    }

    /// Whether an asset is excluded by one of the exclusion markers.
    pub fn is_excluded(&self, path: &AssetPath) -> bool {
        self.exclusions.iter().any(|marker| path.has_segment(marker))
    }

    /// The name a binding is written under.
    pub fn binding_name(&self, identifier: &Identifier) -> String {
        format!("{}{}", self.binding_prefix, identifier)
    }

    /// The name a group list is written under (e.g., `ocean_sprites`).
    pub fn group_list_name(&self, key: &GroupKey) -> String {
        format!("{}_{}s", key, self.suffix)
    }

    /// Comment introducing the group lists.
    pub fn group_comment(&self) -> String {
        format!("(* Grouped {} lists *)", self.suffix)
    }
}
