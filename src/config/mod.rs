//! Configuration loading and management

mod settings;

pub use settings::Settings;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory, looking for .callsift/config.toml
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(".callsift/config.toml");
        if path.exists() {
            return Self::from_file(&path);
        }

        Ok(Self::default())
    }
}
