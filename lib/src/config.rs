use crate::error::{Result, StashError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Bookmark store file
    #[serde(default = "crate::utils::default_store_path")]
    pub store_path: PathBuf,

    /// Directory that receives Markdown exports
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: crate::utils::default_store_path(),
            export_dir: default_export_dir(),
            color: default_color(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_color() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            StashError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/stashmark/config.yml)
    /// Falls back to default config if file doesn't exist or is invalid
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Failed to load config from {:?}: {}", config_path, e);
                    eprintln!("Warning: {} (using default configuration)", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
