//! Configuration management for krnames CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DELAY_SECS: f64 = 0.8;
pub const DEFAULT_TIMEOUT_SECS: f64 = 20.0;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BACKOFF_SECS: f64 = 0.5;

/// Persistent fetch defaults. Every field is optional; unset fields fall back
/// to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub delay_secs: Option<f64>,
    pub timeout_secs: Option<f64>,
    pub max_retries: Option<u32>,
    pub backoff_secs: Option<f64>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("krnames");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(krnames::DEFAULT_BASE_URL)
    }

    pub fn delay(&self) -> Duration {
        secs(self.delay_secs, DEFAULT_DELAY_SECS)
    }

    pub fn timeout(&self) -> Duration {
        secs(self.timeout_secs, DEFAULT_TIMEOUT_SECS)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES)
    }

    pub fn backoff(&self) -> Duration {
        secs(self.backoff_secs, DEFAULT_BACKOFF_SECS)
    }

    /// Overlay values from `other` that are set
    pub fn merge(&mut self, other: Config) {
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.delay_secs.is_some() {
            self.delay_secs = other.delay_secs;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.max_retries.is_some() {
            self.max_retries = other.max_retries;
        }
        if other.backoff_secs.is_some() {
            self.backoff_secs = other.backoff_secs;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Config::default()
    }
}

/// Seconds as a duration; negative or non-finite values fall back to `default`
fn secs(value: Option<f64>, default: f64) -> Duration {
    value
        .and_then(|v| Duration::try_from_secs_f64(v).ok())
        .unwrap_or_else(|| Duration::from_secs_f64(default))
}
