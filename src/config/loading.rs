//! Configuration loading functions.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::error::{ConfigError, ConfigFormat};
use super::types::Config;

/// Project-level config file names, in search order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".project-collector.yaml",
    ".project-collector.yml",
    ".project-collector.json",
    ".project-collector.toml",
];

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ConfigFormat::from_extension)
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse(path, format, e))?,
            ConfigFormat::Json => serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse(path, format, e))?,
            ConfigFormat::Toml => {
                toml::from_str(&content).map_err(|e| ConfigError::parse(path, format, e))?
            }
        };

        config.normalize();
        Ok(config)
    }

    /// Load configuration from the working directory or global config.
    ///
    /// Search order:
    /// 1. `.project-collector.{yaml,yml,json,toml}` in `dir`
    /// 2. `~/.config/project-collector/config.yaml`
    /// 3. Default configuration
    ///
    /// A file that exists but fails to load is logged and skipped.
    pub fn load(dir: Option<&Path>) -> Self {
        if let Some(dir) = dir {
            for filename in CONFIG_FILE_NAMES {
                let path = dir.join(filename);
                if path.exists()
                    && let Some(config) = Self::try_load(&path)
                {
                    return config;
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("project-collector").join("config.yaml");
            if global_config.exists()
                && let Some(config) = Self::try_load(&global_config)
            {
                return config;
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    fn try_load(path: &Path) -> Option<Self> {
        match Self::from_file(path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config file");
                Some(config)
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable config file");
                None
            }
        }
    }
}
