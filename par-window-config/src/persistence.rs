//! Options file persistence and path resolution for `WindowOptions`.

use crate::error::ConfigError;
use crate::window::WindowOptions;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

impl WindowOptions {
    /// Load options from the default path, writing defaults there when missing.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        log::info!("Window options path: {:?}", path);

        if path.exists() {
            Self::load_from(&path)
        } else {
            log::info!("Window options not found, creating default at {:?}", path);
            let options = Self::default();
            if let Err(e) = options.save_to(&path) {
                log::error!("Failed to save default window options: {}", e);
                return Err(e);
            }
            Ok(options)
        }
    }

    /// Load and validate options from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading window options from {:?}", path);
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate options from a YAML string.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let options: WindowOptions = serde_yaml_ng::from_str(contents).map_err(ConfigError::from)?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Default options file location: `<config dir>/par-window/window.yaml`.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("window.yaml")
    }

    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir()
                .map(|dir| dir.join("par-window"))
                .unwrap_or_else(|| PathBuf::from("."))
        }
        #[cfg(not(target_os = "windows"))]
        {
            // XDG convention on all other platforms: ~/.config/par-window
            dirs::home_dir()
                .map(|home| home.join(".config").join("par-window"))
                .unwrap_or_else(|| PathBuf::from("."))
        }
    }
}
