//! CLI configuration persistence.
//!
//! Stores user preferences (default sort key, default skill tree, color
//! output) as JSON at `~/.local/share/arc-companion/config.json`.
//! Loaded once on startup; saved on every change so the file is always
//! current.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arc-companion")
        .join("config.json")
}

/// Persisted CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Sort key used when `--sort` is not given: name, value, or rarity.
    #[serde(default = "default_sort")]
    pub default_sort: String,
    /// Tree opened by `skills`/`plan` when none is named.
    #[serde(default = "default_tree")]
    pub default_tree: String,
    #[serde(default = "default_true")]
    pub color_output: bool,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_sort() -> String { "name".into() }
fn default_tree() -> String { "mobility".into() }
fn default_true() -> bool { true }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            default_tree: default_tree(),
            color_output: true,
            path: default_path(),
        }
    }
}

impl AppConfig {
    /// Load from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path())
    }

    fn load_from(path: &Path) -> Self {
        let mut config: AppConfig = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        config.path = path.to_path_buf();
        config
    }

    /// Persist current config to disk.
    pub fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = std::fs::write(&self.path, json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = AppConfig::load_from(&path);
        assert_eq!(config.default_sort, "name");

        config.default_sort = "value".to_string();
        config.color_output = false;
        config.save();

        let reloaded = AppConfig::load_from(&path);
        assert_eq!(reloaded.default_sort, "value");
        assert!(!reloaded.color_output);
        assert_eq!(reloaded.default_tree, "mobility");
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let config = AppConfig::load_from(&path);
        assert_eq!(config.default_sort, "name");
    }
}
