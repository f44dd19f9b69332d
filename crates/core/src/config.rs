//! Launcher configuration stored as JSON in the platform config directory

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Which native module to load and which entry point to call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleConfig {
    /// Module name without platform prefix/suffix (`mc_jni` -> `libmc_jni.so`)
    #[serde(default = "default_module_name")]
    pub name: String,

    /// Exported symbol invoked once per activation
    #[serde(default = "default_entry_symbol")]
    pub entry_symbol: String,

    /// Directories tried in order before the platform search path
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
}

fn default_module_name() -> String {
    "mc_jni".to_string()
}

fn default_entry_symbol() -> String {
    "compile".to_string()
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            name: default_module_name(),
            entry_symbol: default_entry_symbol(),
            search_paths: vec![],
        }
    }
}

/// Where the completion label is rendered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    #[default]
    Window,
    Console,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub surface: SurfaceKind,

    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,

    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_title() -> String {
    "MCLinker".to_string()
}

fn default_width() -> f32 {
    320.0
}

fn default_height() -> f32 {
    120.0
}

fn default_dark_mode() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceKind::default(),
            title: default_title(),
            width: default_width(),
            height: default_height(),
            dark_mode: default_dark_mode(),
        }
    }
}

/// Configuration for the launcher
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub module: ModuleConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "mclinker", "mc-launcher")
            .context("Failed to determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load config from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, writing the default there if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config from {:?}", path))
        } else {
            let config = Config::default();
            config.save_to(path)?;
            log::info!("Wrote default config to {:?}", path);
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.module.name, "mc_jni");
        assert_eq!(config.module.entry_symbol, "compile");
        assert!(config.module.search_paths.is_empty());
        assert_eq!(config.display.surface, SurfaceKind::Window);
        assert!(config.display.dark_mode);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{ "module": { "search_paths": ["/opt/mcld/lib"] }, "display": { "surface": "console" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.module.name, "mc_jni");
        assert_eq!(config.module.search_paths, vec![PathBuf::from("/opt/mcld/lib")]);
        assert_eq!(config.display.surface, SurfaceKind::Console);
        assert_eq!(config.display.title, "MCLinker");
    }

    #[test]
    fn test_load_from_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let mut edited = config.clone();
        edited.module.name = "mcld".to_string();
        edited.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().module.name, "mcld");
    }

    #[test]
    fn test_load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
