//! Configuration file handling.
//!
//! Settings are read from an INI file, by default `assetbind.ini` in the
//! working directory. Every setting has a default, so the file is optional.
//!
//! ```ini
//! [logging]
//! level = info
//! file = build/assetbind.log
//!
//! [category.sprites]
//! root = assets/sprites
//! exclude = _zips
//!
//! [category.sounds]
//! root = assets/sounds
//! extension = wav
//! suffix = sound
//!
//! [redistribute]
//! archive_dir = assets/sprites/lifeforms/_zips
//! output_dir = assets/sprites/lifeforms
//! ```

mod error;

pub use error::{ConfigError, ConfigResult};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ini::Ini;

use crate::category::AssetCategory;
use crate::redistribute::DEFAULT_SCRATCH_NAME;

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "assetbind.ini";

/// Prefix of category sections.
const CATEGORY_PREFIX: &str = "category.";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (e.g., "info").
    pub level: String,

    /// Optional log file, written in addition to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Archive redistribution settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedistributeConfig {
    /// Directory containing `<class>-<stage>.zip` archives.
    pub archive_dir: PathBuf,

    /// Root of the redistributed frame tree.
    pub output_dir: PathBuf,

    /// Scratch directory name inside `output_dir`.
    pub scratch_dir: String,
}

impl Default for RedistributeConfig {
    fn default() -> Self {
        Self {
            archive_dir: PathBuf::from("."),
            output_dir: PathBuf::from(".."),
            scratch_dir: DEFAULT_SCRATCH_NAME.to_string(),
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Logging settings.
    pub logging: LoggingConfig,

    /// Asset categories by name.
    pub categories: BTreeMap<String, AssetCategory>,

    /// Redistribution settings.
    pub redistribute: RedistributeConfig,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let categories = [AssetCategory::sprites(), AssetCategory::fonts()]
            .into_iter()
            .map(|category| (category.name.clone(), category))
            .collect();

        Self {
            logging: LoggingConfig::default(),
            categories,
            redistribute: RedistributeConfig::default(),
        }
    }
}

impl ConfigFile {
    /// Parse configuration text on top of the defaults.
    pub fn parse(text: &str) -> ConfigResult<Self> {
        let ini = Ini::load_from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_ini(&ini)
    }

    /// Load configuration from a file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&text)
    }

    /// Resolve and load the configuration.
    ///
    /// An explicit path must exist. Otherwise [`DEFAULT_CONFIG_FILE`] in the
    /// working directory is used if present, and the defaults if not.
    /// Returns the loaded configuration and the file it came from.
    pub fn resolve(explicit: Option<&Path>) -> ConfigResult<(Self, Option<PathBuf>)> {
        match explicit {
            Some(path) => Ok((Self::load_from(path)?, Some(path.to_path_buf()))),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Ok((Self::load_from(&default_path)?, Some(default_path)))
                } else {
                    Ok((Self::default(), None))
                }
            }
        }
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> ConfigResult<&AssetCategory> {
        self.categories
            .get(name)
            .ok_or_else(|| ConfigError::UnknownCategory(name.to_string()))
    }

    fn from_ini(ini: &Ini) -> ConfigResult<Self> {
        let mut config = Self::default();

        for (section, props) in ini.iter() {
            let Some(section) = section else {
                continue;
            };

            if section == "logging" {
                if let Some(level) = props.get("level") {
                    config.logging.level = level.to_string();
                }
                if let Some(file) = props.get("file") {
                    config.logging.file = non_empty(file).map(PathBuf::from);
                }
            } else if section == "redistribute" {
                let redistribute = &mut config.redistribute;
                if let Some(dir) = props.get("archive_dir") {
                    redistribute.archive_dir = PathBuf::from(dir);
                }
                if let Some(dir) = props.get("output_dir") {
                    redistribute.output_dir = PathBuf::from(dir);
                }
                if let Some(name) = props.get("scratch_dir") {
                    redistribute.scratch_dir = name.to_string();
                }
            } else if let Some(name) = section.strip_prefix(CATEGORY_PREFIX) {
                let category = parse_category(name, section, props, config.categories.get(name))?;
                config.categories.insert(name.to_string(), category);
            } else {
                return Err(ConfigError::UnknownSection(section.to_string()));
            }
        }

        Ok(config)
    }

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        let mut ini = Ini::new();

        ini.with_section(Some("logging"))
            .set("level", self.logging.level.as_str())
            .set(
                "file",
                self.logging
                    .file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            );

        for category in self.categories.values() {
            ini.with_section(Some(format!("{}{}", CATEGORY_PREFIX, category.name)))
                .set("root", category.root.display().to_string())
                .set("extension", category.extension.as_str())
                .set("suffix", category.suffix.as_str())
                .set("exclude", category.exclusions.join(","))
                .set("header", category.header.as_str())
                .set("groups", category.emit_groups.to_string())
                .set("binding_prefix", category.binding_prefix.as_str());
        }

        ini.with_section(Some("redistribute"))
            .set(
                "archive_dir",
                self.redistribute.archive_dir.display().to_string(),
            )
            .set(
                "output_dir",
                self.redistribute.output_dir.display().to_string(),
            )
            .set("scratch_dir", self.redistribute.scratch_dir.as_str());

        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = ini.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Build a category from its section, starting from an existing definition.
fn parse_category(
    name: &str,
    section: &str,
    props: &ini::Properties,
    base: Option<&AssetCategory>,
) -> ConfigResult<AssetCategory> {
    let mut category = match base {
        Some(base) => base.clone(),
        None => {
            let root = require(section, props, "root")?;
            let extension = require(section, props, "extension")?;
            let suffix = props.get("suffix").unwrap_or(name);
            AssetCategory::new(name, root, extension, suffix)
        }
    };

    if let Some(root) = props.get("root") {
        category.root = PathBuf::from(root);
    }
    if let Some(extension) = props.get("extension") {
        category.extension = extension.trim_start_matches('.').to_string();
    }
    if let Some(suffix) = props.get("suffix") {
        category.suffix = suffix.to_string();
    }
    if let Some(exclude) = props.get("exclude") {
        category.exclusions = exclude
            .split(',')
            .map(str::trim)
            .filter(|marker| !marker.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Some(header) = props.get("header") {
        category.header = header.to_string();
    }
    if let Some(groups) = props.get("groups") {
        category.emit_groups = parse_bool(groups).ok_or_else(|| ConfigError::InvalidValue {
            section: section.to_string(),
            key: "groups".to_string(),
            value: groups.to_string(),
        })?;
    }
    if let Some(prefix) = props.get("binding_prefix") {
        category.binding_prefix = prefix.to_string();
    }

    Ok(category)
}

fn require<'a>(section: &str, props: &'a ini::Properties, key: &str) -> ConfigResult<&'a str> {
    props
        .get(key)
        .and_then(non_empty)
        .ok_or_else(|| ConfigError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        })
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ConfigFile::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, None);
        assert_eq!(config.category("sprites").unwrap(), &AssetCategory::sprites());
        assert_eq!(config.category("fonts").unwrap(), &AssetCategory::fonts());
        assert_eq!(config.redistribute.archive_dir, PathBuf::from("."));
        assert_eq!(config.redistribute.output_dir, PathBuf::from(".."));
        assert_eq!(config.redistribute.scratch_dir, "__tmp");
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(ConfigFile::parse("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_parse_overrides_builtin_category() {
        let config = ConfigFile::parse(
            "[category.sprites]\nroot = game/sprites\nexclude = _zips, _raw\ngroups = no\n",
        )
        .unwrap();

        let sprites = config.category("sprites").unwrap();
        assert_eq!(sprites.root, PathBuf::from("game/sprites"));
        assert_eq!(sprites.exclusions, vec!["_zips".to_string(), "_raw".to_string()]);
        assert!(!sprites.emit_groups);
        assert_eq!(sprites.extension, "png");
    }

    #[test]
    fn test_parse_new_category() {
        let config = ConfigFile::parse(
            "[category.sounds]\nroot = assets/sounds\nextension = .wav\nsuffix = sound\n",
        )
        .unwrap();

        let sounds = config.category("sounds").unwrap();
        assert_eq!(sounds.root, PathBuf::from("assets/sounds"));
        assert_eq!(sounds.extension, "wav");
        assert_eq!(sounds.suffix, "sound");
        assert_eq!(sounds.header, "(** Auto-generated sound blobs *)");
        assert!(sounds.emit_groups);
    }

    #[test]
    fn test_new_category_requires_root() {
        let err = ConfigFile::parse("[category.sounds]\nextension = wav\n").unwrap_err();
        match err {
            ConfigError::MissingKey { section, key } => {
                assert_eq!(section, "category.sounds");
                assert_eq!(key, "root");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_invalid_bool() {
        let err = ConfigFile::parse("[category.fonts]\ngroups = maybe\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_unknown_section() {
        let err = ConfigFile::parse("[render]\nquality = high\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSection(_)));
    }

    #[test]
    fn test_logging_and_redistribute_sections() {
        let config = ConfigFile::parse(
            "[logging]\nlevel = debug\nfile = build/assetbind.log\n\n\
             [redistribute]\narchive_dir = zips\noutput_dir = lifeforms\nscratch_dir = scratch\n",
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("build/assetbind.log")));
        assert_eq!(config.redistribute.archive_dir, PathBuf::from("zips"));
        assert_eq!(config.redistribute.output_dir, PathBuf::from("lifeforms"));
        assert_eq!(config.redistribute.scratch_dir, "scratch");
    }

    #[test]
    fn test_unknown_category_lookup() {
        let err = ConfigFile::default().category("sounds").unwrap_err();
        assert_eq!(err.to_string(), "unknown asset category: sounds");
    }

    #[test]
    fn test_ini_string_reloads_to_same_config() {
        let mut config = ConfigFile::default();
        config.logging.file = Some(PathBuf::from("out.log"));

        let reloaded = ConfigFile::parse(&config.to_ini_string()).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::load_from(&temp.path().join("missing.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
    }

    #[test]
    fn test_resolve_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.ini");
        fs::write(&path, "[logging]\nlevel = warn\n").unwrap();

        let (config, source) = ConfigFile::resolve(Some(&path)).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(source, Some(path));
    }
}
