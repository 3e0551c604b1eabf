use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Application configuration.
///
/// Everything has a working default; a TOML file at
/// `~/.losttrack/config.toml` can override individual keys.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl Config {
    /// Per-user data directory (`~/.losttrack`)
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".losttrack")
    }

    /// Config file location (`~/.losttrack/config.toml`)
    pub fn config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Log file location; the terminal belongs to the TUI, so logs go here
    pub fn log_path() -> PathBuf {
        Self::data_dir().join("losttrack.log")
    }

    /// Load config from the default location, falling back to defaults when
    /// no file exists. A malformed file is an error, not a silent fallback.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| StoreError::config(&path, e.to_string()))
    }
}

fn default_db_path() -> PathBuf {
    Config::data_dir().join("items.db")
}
