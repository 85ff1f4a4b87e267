use crate::constants::{DEFAULT_SERVER_URL, RELOAD_DELAY_MS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// TOML configuration for the client
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RefreshConfig {
    #[serde(default = "default_reload_delay_ms")]
    pub delay_ms: u64,
}

// Default value functions
fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}
fn default_reload_delay_ms() -> u64 {
    RELOAD_DELAY_MS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_reload_delay_ms(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load the config file if it exists; a missing file means defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if !path.as_ref().exists() {
            debug!(path = %path.as_ref().display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
