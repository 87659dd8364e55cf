//! Output rendering and writing.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::category::AssetCategory;
use crate::group::MergedGroupMap;

use super::{BindingRecord, EmitError, EmitResult};

/// Render the generated file.
///
/// Layout:
/// - the category header, then a blank line
/// - one binding per record, sorted by the full line text
/// - if the category emits groups: a blank line, the group comment and one
///   list per non-root, non-empty merged group, sorted by group key
pub fn render(
    category: &AssetCategory,
    records: &[BindingRecord],
    merged: &MergedGroupMap,
) -> String {
    let mut out = String::new();
    out.push_str(&category.header);
    out.push_str("\n\n");

    let mut lines: Vec<String> = records.iter().map(|r| r.line(category)).collect();
    lines.sort();
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }

    if category.emit_groups {
        out.push('\n');
        out.push_str(&category.group_comment());
        out.push('\n');

        for (key, identifiers) in merged.emitted() {
            let elements: Vec<String> = identifiers
                .iter()
                .map(|id| category.binding_name(id))
                .collect();
            out.push_str(&format!(
                "let {} : (string * string) list = [{}]\n",
                category.group_list_name(key),
                elements.join("; ")
            ));
        }
    }

    out
}

/// Write `contents` to `path` through a temporary sibling file.
///
/// The temporary file is renamed over `path` only after it has been fully
/// written, so readers never observe a partially generated file.
pub fn write_atomic(path: &Path, contents: &str) -> EmitResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| EmitError::CreateDirFailed {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_sibling(path);
    let result = write_file(&temp_path, contents).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| EmitError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_file(path: &Path, contents: &str) -> EmitResult<()> {
    let write_failed = |e| EmitError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(write_failed)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes()).map_err(write_failed)?;
    writer.flush().map_err(write_failed)?;
    Ok(())
}

/// `out/sprites.ml` -> `out/sprites.ml.tmp`
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
