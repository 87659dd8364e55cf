//! Integration tests for bindings generation.
//!
//! These tests build real asset trees on disk and verify:
//! - Identifier synthesis and group aggregation end to end
//! - Deterministic, idempotent output
//! - Exclusion of archive directories
//! - Font category output settings
//!
//! Run with: `cargo test --test emit_integration`

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use assetbind::category::AssetCategory;
use assetbind::emit::{BindingEmitter, EmitError};

// ============================================================================
// Helper Functions
// ============================================================================

/// Create empty asset files under `root`.
fn touch_all(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"asset").unwrap();
    }
}

/// Sprite category rooted at `root`.
fn sprites_at(root: &Path) -> AssetCategory {
    let mut category = AssetCategory::sprites();
    category.root = root.to_path_buf();
    category
}

/// The group list line for `name`, if present.
fn group_line<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let prefix = format!("let {} : (string * string) list", name);
    text.lines().find(|line| line.starts_with(&prefix))
}

// ============================================================================
// Sprite Generation
// ============================================================================

#[test]
fn test_nested_tree_produces_ancestor_groups() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("sprites");
    touch_all(
        &root,
        &[
            "ocean/fish.png",
            "ocean/deep/angler.png",
            "ocean/deep/squid.png",
            "forest/tree.png",
        ],
    );

    let text = BindingEmitter::new(&sprites_at(&root)).generate().unwrap();

    assert_eq!(
        group_line(&text, "ocean_sprites").unwrap(),
        "let ocean_sprites : (string * string) list = \
         [ocean_deep_angler_sprite; ocean_deep_squid_sprite; ocean_fish_sprite]"
    );
    assert_eq!(
        group_line(&text, "ocean_deep_sprites").unwrap(),
        "let ocean_deep_sprites : (string * string) list = \
         [ocean_deep_angler_sprite; ocean_deep_squid_sprite]"
    );
    assert_eq!(
        group_line(&text, "forest_sprites").unwrap(),
        "let forest_sprites : (string * string) list = [forest_tree_sprite]"
    );
}

#[test]
fn test_binding_paths_are_root_prefixed() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("sprites");
    touch_all(&root, &["ocean/fish.png"]);

    let text = BindingEmitter::new(&sprites_at(&root)).generate().unwrap();

    let path = format!("{}/ocean/fish.png", root.display());
    let expected = format!(
        "let ocean_fish_sprite : string * string = \"{}\", [%blob \"{}\"]",
        path, path
    );
    assert!(text.lines().any(|line| line == expected), "{}", text);
}

#[test]
fn test_root_level_assets_have_no_group() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("sprites");
    touch_all(&root, &["logo.png", "title.png"]);

    let text = BindingEmitter::new(&sprites_at(&root)).generate().unwrap();

    assert!(text.contains("let logo_sprite : string * string"));
    assert!(text.contains("let title_sprite : string * string"));
    assert!(!text.contains("(string * string) list"));
}

#[test]
fn test_zips_directory_is_excluded() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("sprites");
    touch_all(
        &root,
        &[
            "lifeforms/amoeba/species_1/0.png",
            "lifeforms/_zips/preview.png",
            "lifeforms/_zips/nested/frame.png",
        ],
    );

    let text = BindingEmitter::new(&sprites_at(&root)).generate().unwrap();

    assert!(text.contains("lifeforms_amoeba_species_1_0_sprite"));
    assert!(!text.contains("_zips"));
    assert!(!text.contains("preview"));
}

#[test]
fn test_hyphens_normalize_in_identifiers_and_groups() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("sprites");
    touch_all(&root, &["sea-life/blue-whale.png"]);

    let text = BindingEmitter::new(&sprites_at(&root)).generate().unwrap();

    assert!(text.contains("let sea_life_blue_whale_sprite : string * string"));
    assert_eq!(
        group_line(&text, "sea_life_sprites").unwrap(),
        "let sea_life_sprites : (string * string) list = [sea_life_blue_whale_sprite]"
    );
    // The flattened key is also split on the normalized separator.
    assert_eq!(
        group_line(&text, "sea_sprites").unwrap(),
        "let sea_sprites : (string * string) list = [sea_life_blue_whale_sprite]"
    );
}

#[test]
fn test_colliding_identifiers_are_rejected() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("sprites");
    touch_all(&root, &["a-b/c.png", "a_b/c.png"]);

    let err = BindingEmitter::new(&sprites_at(&root)).generate().unwrap_err();
    assert!(matches!(err, EmitError::DuplicateIdentifier { .. }));
}

#[test]
fn test_other_extensions_are_ignored() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("sprites");
    touch_all(&root, &["ocean/fish.png", "ocean/notes.txt", "ocean/fish.PNG.bak"]);

    let text = BindingEmitter::new(&sprites_at(&root)).generate().unwrap();

    assert_eq!(text.matches("string * string =").count(), 1);
}

#[test]
fn test_missing_root_writes_header_only() {
    let temp = TempDir::new().unwrap();
    let category = sprites_at(&temp.path().join("absent"));
    let output = temp.path().join("sprites.ml");

    let summary = BindingEmitter::new(&category).emit(&output).unwrap();

    assert_eq!(summary.bindings, 0);
    assert_eq!(summary.groups, 0);
    assert!(fs::read_to_string(&output)
        .unwrap()
        .starts_with("(** Auto-generated sprite blobs *)\n"));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_regeneration_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("sprites");
    touch_all(
        &root,
        &[
            "zeta/last.png",
            "alpha/first.png",
            "alpha/beta/mid.png",
            "solo.png",
        ],
    );
    let category = sprites_at(&root);
    let output = temp.path().join("gen/sprites.ml");

    let first = BindingEmitter::new(&category).emit(&output).unwrap();
    let first_text = fs::read(&output).unwrap();
    let second = BindingEmitter::new(&category).emit(&output).unwrap();
    let second_text = fs::read(&output).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_text, second_text);
    assert_eq!(first.bindings, 4);
    assert_eq!(first.groups, 3);
}

#[test]
fn test_bindings_are_sorted() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("sprites");
    touch_all(&root, &["zeta/z.png", "alpha/a.png", "mid/m.png"]);

    let text = BindingEmitter::new(&sprites_at(&root)).generate().unwrap();
    let bindings: Vec<&str> = text
        .lines()
        .filter(|line| line.contains(": string * string ="))
        .collect();

    let mut sorted = bindings.clone();
    sorted.sort();
    assert_eq!(bindings, sorted);
}

// ============================================================================
// Fonts
// ============================================================================

#[test]
fn test_fonts_use_prefix_and_skip_groups() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("fonts");
    touch_all(&root, &["pixel/bold.ttf", "mono.ttf", "mono.otf"]);

    let mut fonts = AssetCategory::fonts();
    fonts.root = root.clone();
    let output = temp.path().join("fonts.ml");

    let summary = BindingEmitter::new(&fonts).emit(&output).unwrap();
    let text = fs::read_to_string(&output).unwrap();

    assert_eq!(summary.bindings, 2);
    assert_eq!(summary.groups, 0);
    assert!(text.starts_with("(** Fonts - Auto-generated font blobs *)\n\n"));
    assert!(text.contains("let _mono_font : string * string"));
    assert!(text.contains("let _pixel_bold_font : string * string"));
    assert!(!text.contains("Grouped"));
}
