//! CLI configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".atlas")
        .join("config.toml")
}

/// Configuration for the console
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Unit label shown in the road length prompt
    pub distance_unit: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            distance_unit: "km".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, falling back to defaults when the
    /// file does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
