use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Base directory holding one subdirectory per character
    #[serde(default = "default_logs_root")]
    pub logs_root: PathBuf,

    /// Minimum zero-padding width for the numeric prefix
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            logs_root: default_logs_root(),
            pad_width: default_pad_width(),
        }
    }
}

fn default_logs_root() -> PathBuf {
    PathBuf::from("Assets/11.GameDatas/CachedLogs")
}

fn default_pad_width() -> usize {
    2
}

impl Config {
    /// Load config from .renum/config.toml in the current directory if it
    /// exists, otherwise return defaults.
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".renum").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
