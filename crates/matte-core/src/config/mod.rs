//! Configuration management for Matte.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults; a missing config file is not an error.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Matte.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings (directory layout)
    pub general: GeneralConfig,

    /// Processing settings
    pub processing: ProcessingConfig,

    /// Canvas normalization settings
    pub canvas: CanvasConfig,

    /// Resource limits
    pub limits: LimitsConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.matte.matte/config.toml
    /// - Linux: ~/.config/matte/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\matte\config\config.toml
    ///
    /// Falls back to ~/.matte/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "matte", "matte")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".matte").join("config.toml")
            })
    }

    /// Get the resolved input directory path (with ~ expansion).
    pub fn input_dir(&self) -> PathBuf {
        expand_dir(&self.general.input_dir)
    }

    /// Get the resolved output directory path (with ~ expansion).
    pub fn output_dir(&self) -> PathBuf {
        expand_dir(&self.general.output_dir)
    }

    /// Get the resolved result directory path (with ~ expansion).
    pub fn result_dir(&self) -> PathBuf {
        expand_dir(&self.general.result_dir)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

fn expand_dir(dir: &Path) -> PathBuf {
    let path_str = dir.to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.into_owned())
}
