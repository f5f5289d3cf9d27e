//! Global configuration for graphpaths (stored in ~/.config/graphpaths/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::types::{GraphDefaults, OutputConfig};
use crate::error::{GraphError, Result};

const CONFIG_DIR: &str = "graphpaths";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHPATHS_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GlobalConfig {
    #[serde(default)]
    pub graph: GraphDefaults,

    #[serde(default)]
    pub output: OutputConfig,
}

impl GlobalConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the global configuration, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no global config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read global config from {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            GraphError::Other(format!(
                "failed to parse global config from {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| GraphError::Other("invalid config path".to_string()))?;

        fs::create_dir_all(config_dir).map_err(|e| {
            GraphError::Other(format!(
                "failed to create config directory {}: {}",
                config_dir.display(),
                e
            ))
        })?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            GraphError::Other(format!(
                "failed to write config to {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Returns the source description for display purposes
    pub fn source_display() -> String {
        if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
            "custom config directory".to_string()
        } else {
            "~/.config/graphpaths/config.toml".to_string()
        }
    }
}
