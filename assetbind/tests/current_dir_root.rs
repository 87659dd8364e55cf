//! Integration test for categories rooted at the working directory.
//!
//! Changing the working directory affects the whole process, so this lives
//! in its own test binary with a single test.
//!
//! Run with: `cargo test --test current_dir_root`

use std::env;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use assetbind::category::AssetCategory;
use assetbind::discovery::discover;
use assetbind::emit::BindingEmitter;

#[test]
fn test_current_dir_roots_find_assets() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("ocean")).unwrap();
    fs::write(temp.path().join("ocean/fish.png"), b"fish").unwrap();
    fs::write(temp.path().join("logo.png"), b"logo").unwrap();

    let previous = env::current_dir().unwrap();
    env::set_current_dir(temp.path()).unwrap();

    let mut results = Vec::new();
    for root in [".", "./", "ocean/.."] {
        let mut category = AssetCategory::sprites();
        category.root = PathBuf::from(root);

        let found: Vec<String> = discover(&category)
            .unwrap()
            .iter()
            .map(|asset| asset.display_path().to_string())
            .collect();
        let text = BindingEmitter::new(&category).generate().unwrap();
        results.push((root, found, text));
    }

    env::set_current_dir(previous).unwrap();

    for (root, found, text) in &results[..2] {
        assert_eq!(found, &vec!["logo.png", "ocean/fish.png"], "root {}", root);
        assert!(
            text.contains(
                "let ocean_fish_sprite : string * string = \
                 \"ocean/fish.png\", [%blob \"ocean/fish.png\"]"
            ),
            "root {}: {}",
            root,
            text
        );
        assert!(text.contains("let ocean_sprites : (string * string) list = [ocean_fish_sprite]"));
    }

    let (_, found, _) = &results[2];
    assert_eq!(found.len(), 2);
}
