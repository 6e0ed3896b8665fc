//! User configuration management
//!
//! Optional defaults stored in ~/.codequill/config.toml

use crate::core::error::{CodequillError, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "CODEQUILL_CONFIG";

/// User configuration for Codequill
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Output configuration
    pub output: OutputConfig,
    /// Terminal configuration
    pub ui: UiConfig,
    /// File reading configuration
    pub read: ReadConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Artifact path used when `--output` is not given
    pub file: Option<PathBuf>,
}

/// Terminal configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the progress spinner
    pub progress: Option<bool>,
}

/// File reading configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    /// Worker threads for reading files (0 = one per core)
    pub threads: Option<usize>,
}

impl UserConfig {
    /// Load the configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Ok(config_path) => Self::load_from(&config_path),
            // Without a home directory there is nothing to load
            Err(CodequillError::HomeDirectoryNotFound) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load the configuration from `config_path`.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            // Return default configuration if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        toml::from_str(&content).map_err(|e| {
            CodequillError::configuration(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    /// Get the path to the user configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let user_dirs = UserDirs::new().ok_or(CodequillError::HomeDirectoryNotFound)?;

        let codequill_dir = user_dirs.home_dir().join(".codequill");
        Ok(codequill_dir.join("config.toml"))
    }

    /// Output path: explicit flag, then config, then the built-in default
    pub fn output_file(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output.file.clone())
            .unwrap_or_else(|| PathBuf::from(crate::bundle::DEFAULT_OUTPUT))
    }

    pub fn show_progress(&self) -> bool {
        self.ui.progress.unwrap_or(true)
    }

    pub fn read_threads(&self) -> usize {
        self.read.threads.unwrap_or(0)
    }
}
