//! Asset discovery.
//!
//! Walks a category root for files with the category's extension and returns
//! them as [`AssetPath`]s in a deterministic order. Directory listing order is
//! never relied upon; results are always sorted before they are returned.

use glob::{glob_with, MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::asset::{without_cur_dir, AssetPath};
use crate::category::AssetCategory;
use crate::emit::{EmitError, EmitResult};

/// Discover every asset of a category, sorted and with exclusions removed.
///
/// Entries that cannot be read or whose path is not valid UTF-8 are skipped
/// with a warning. A missing root yields no assets.
pub fn discover(category: &AssetCategory) -> EmitResult<Vec<AssetPath>> {
    let root = &category.root;

    if !root.is_dir() {
        warn!(root = %root.display(), "Asset root does not exist, nothing to discover");
        return Ok(Vec::new());
    }

    let prefix = without_cur_dir(root);
    let prefix = prefix
        .to_str()
        .ok_or_else(|| EmitError::InvalidRoot(root.clone()))?;
    let files = format!("**/*.{}", Pattern::escape(&category.extension));
    // An empty prefix means the working directory; glob reports those
    // matches without a leading `./`.
    let pattern = if prefix.is_empty() {
        files
    } else if prefix.ends_with('/') {
        format!("{}{}", Pattern::escape(prefix), files)
    } else {
        format!("{}/{}", Pattern::escape(prefix), files)
    };

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let entries = glob_with(&pattern, options).map_err(|e| EmitError::InvalidPattern {
        pattern: pattern.clone(),
        reason: e.to_string(),
    })?;

    let mut assets = Vec::new();
    for entry in entries {
        let full = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!(path = %e.path().display(), error = %e.error(), "Skipping unreadable entry");
                continue;
            }
        };

        if !full.is_file() {
            continue;
        }

        let asset = match AssetPath::from_full(root, &full) {
            Ok(asset) => asset,
            Err(e) => {
                warn!(path = %full.display(), error = %e, "Skipping asset");
                continue;
            }
        };

        if category.is_excluded(&asset) {
            debug!(path = asset.display_path(), "Excluded asset");
            continue;
        }

        assets.push(asset);
    }

    assets.sort();
    debug!(
        category = %category.name,
        count = assets.len(),
        "Discovered assets"
    );

    Ok(assets)
}
