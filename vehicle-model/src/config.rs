use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::car::Car;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "VEHICLE_MODEL_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Defaults for building a car from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CarDefaults {
    pub name: String,
    pub max_speed: i32,
}

impl CarDefaults {
    pub fn build(&self) -> Car {
        Car::new(self.name.clone(), self.max_speed)
    }
}

/// Model configuration read from `~/.config/vehicle-model/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub log_filter: String,
    pub car: Option<CarDefaults>,
}

/// Raw TOML file structure.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    log_filter: Option<String>,
    car: Option<CarDefaults>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            car: None,
        }
    }
}

/// Default config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vehicle-model").join("config.toml"))
}

impl ModelConfig {
    /// Load configuration from file and environment.
    ///
    /// A missing file yields defaults. `VEHICLE_MODEL_LOG` overrides the
    /// file's `log_filter`.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path(),
        };

        let file_config = match path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config: {}", path.display()))?;
                Self::parse_file(&content)
                    .with_context(|| format!("failed to parse config: {}", path.display()))?
            }
            _ => ConfigFile::default(),
        };

        Ok(Self::from_file_and_env(
            file_config,
            std::env::var(LOG_ENV_VAR).ok(),
        ))
    }

    /// Parse configuration from TOML text without consulting the environment.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file_config = Self::parse_file(content)?;
        Ok(Self::from_file_and_env(file_config, None))
    }

    fn parse_file(content: &str) -> Result<ConfigFile> {
        let file_config: ConfigFile = toml::from_str(content)?;
        Ok(file_config)
    }

    fn from_file_and_env(file_config: ConfigFile, env_filter: Option<String>) -> Self {
        let log_filter = env_filter
            .filter(|f| !f.trim().is_empty())
            .or(file_config.log_filter)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            log_filter,
            car: file_config.car,
        }
    }
}
