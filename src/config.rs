//! Runtime configuration
//!
//! Read from a JSON file, either given explicitly or found at
//! `<config dir>/hashchain/config.json`. Missing fields take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::{Difficulty, DEFAULT_DIFFICULTY};
use crate::logging::LogFormat;

const CONFIG_DIR: &str = "hashchain";
const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid difficulty: {0}")]
    Difficulty(#[from] hashchain_core::Error),

    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Leading zero hex characters required of every record identity
    pub difficulty: u8,
    /// Identity derivations allowed per append; unbounded when unset
    pub max_attempts: Option<u64>,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            max_attempts: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location if it exists.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    /// Values are not validated here so command-line overrides can replace
    /// them first; call [`Config::validate`] once they are applied.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace file values with command-line flags, where given
    pub fn apply_overrides(&mut self, difficulty: Option<u8>, log_format: Option<LogFormat>) {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(log_format) = log_format {
            self.log_format = log_format;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.difficulty()?;
        if self.max_attempts == Some(0) {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }

    pub fn difficulty(&self) -> Result<Difficulty, ConfigError> {
        Ok(Difficulty::new(self.difficulty)?)
    }
}

/// `<config dir>/hashchain/config.json`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
