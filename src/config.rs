use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "marina";
const CONFIG_FILE: &str = "config.json";

/// Environment variable naming the data file, checked after `--file`.
pub const DATA_FILE_ENV: &str = "MARINA_DATA_FILE";

/// Default tracing filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "marina=warn";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarinaConfig {
    /// Data file used when none is given on the command line or in the environment.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Tracing filter directive, e.g. `marina=debug`.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl MarinaConfig {
    /// Load configuration from the user's config directory.
    /// Returns default config if file doesn't exist or fails to parse.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let config_path = get_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse config file")
    }

    /// Save the current configuration to disk. Returns the path written.
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(config_path)
    }

    /// Pick the data file: the explicit path, then the environment, then the config.
    pub fn resolve_data_file(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| {
                std::env::var_os(DATA_FILE_ENV)
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| self.data_file.clone())
    }

    /// The tracing filter: `RUST_LOG`, then the config, then the default.
    pub fn log_filter(&self) -> String {
        std::env::var("RUST_LOG")
            .ok()
            .or_else(|| self.log_filter.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
