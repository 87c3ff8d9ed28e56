//! # Configuration
//!
//! Catalog configuration is managed by [`confique`], which layers environment
//! variables over a TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **CLI flags**: `--data`, `--lenient` / `--strict`, `--no-color` (applied by the CLI).
//! 2. **Environment variables**: `CATALOG_DATA_DIR`, `CATALOG_INTEGRITY`, `CATALOG_COLOR`.
//! 3. **Config file**: the path in `CATALOG_CONFIG` if set, otherwise `catalog.toml` in
//!    the OS config directory (via `directories`).
//! 4. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | unset | Directory with `users.json`, `categories.json`, `products.json`; unset means the built-in fixture |
//! | `integrity` | `strict` | `strict` rejects dangling references at load, `lenient` shows them as `-` |
//! | `color` | `true` | `false` disables styled output even on a color terminal |

use crate::error::{CatalogError, Result};
use crate::integrity::IntegrityPolicy;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "catalog.toml";
pub const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG";

fn parse_policy(value: &str) -> Result<IntegrityPolicy> {
    value.parse()
}

fn parse_flag(value: &str) -> std::result::Result<bool, std::str::ParseBoolError> {
    value.trim().to_ascii_lowercase().parse()
}

/// Configuration for catalog, stored in `catalog.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory holding the three JSON data files.
    #[config(env = "CATALOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// How to treat dangling references: "strict" or "lenient".
    /// When absent, defaults to strict.
    #[config(env = "CATALOG_INTEGRITY", parse_env = parse_policy)]
    pub integrity: Option<IntegrityPolicy>,

    /// Style output when the terminal supports it.
    #[config(env = "CATALOG_COLOR", parse_env = parse_flag, default = true)]
    pub color: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            integrity: None,
            color: true,
        }
    }
}

impl CatalogConfig {
    /// Resolves environment variables over `config_file` (if it exists) over defaults.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = config_file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// The integrity policy, using the default when not configured.
    pub fn integrity(&self) -> IntegrityPolicy {
        self.integrity.unwrap_or_default()
    }

    /// Renders the resolved settings as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CatalogError::Config(e.to_string()))
    }
}

/// Location of the config file: `CATALOG_CONFIG` when set, otherwise the user-wide
/// file in the platform config directory (if there is one).
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "catalog", "catalog").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.integrity(), IntegrityPolicy::Strict);
        assert!(config.color);
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "data_dir = \"/srv/catalog\"\nintegrity = \"lenient\"\ncolor = false\n",
        )
        .unwrap();

        let config = CatalogConfig::load(Some(&path)).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/catalog")));
        assert_eq!(config.integrity(), IntegrityPolicy::Lenient);
        assert!(!config.color);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = CatalogConfig::load(Some(&temp.path().join("absent.toml"))).unwrap();
        assert_eq!(config.integrity(), IntegrityPolicy::Strict);
        assert!(config.color);
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "integrity = \"sloppy\"\n").unwrap();

        let err = CatalogConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_to_toml_lists_settings() {
        let config = CatalogConfig {
            integrity: Some(IntegrityPolicy::Lenient),
            ..Default::default()
        };
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("integrity = \"lenient\""));
        assert!(rendered.contains("color = true"));
    }

    #[test]
    fn test_parse_flag_accepts_mixed_case() {
        assert_eq!(parse_flag("FALSE"), Ok(false));
        assert_eq!(parse_flag(" true"), Ok(true));
        assert!(parse_flag("yes").is_err());
    }
}
