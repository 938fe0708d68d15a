//! Client configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `~/.noise-monitor/config.toml`, then `NOISE_*` environment variables.

use crate::error::Result;
use crate::gateway::GatewayConfig;
use config::{Config, Environment, File};
use noise_core::store::noise_home;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Path prefix every backend endpoint lives under
pub const API_PREFIX: &str = "/api";

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_DEV_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Selects how the backend base URL is resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Requests go through the dev-server proxy
    Development,
    /// Requests go straight to the backend origin
    #[default]
    Production,
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Development => write!(f, "development"),
            BuildMode::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub mode: BuildMode,
    pub dev_origin: String,
    pub api_origin: String,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::default(),
            dev_origin: DEFAULT_DEV_ORIGIN.to_string(),
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Load from `~/.noise-monitor/config.toml` and the environment
    pub fn load() -> Result<Self> {
        let path = noise_home()?.join(CONFIG_FILE_NAME);
        Self::load_from(Some(&path))
    }

    /// Load with an explicit config file; a missing file is not an error
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = Config::builder()
            .set_default("mode", BuildMode::default().to_string())?
            .set_default("dev_origin", DEFAULT_DEV_ORIGIN)?
            .set_default("api_origin", DEFAULT_API_ORIGIN)?
            .set_default("timeout_ms", DEFAULT_TIMEOUT_MS)?;

        if let Some(path) = path {
            settings = settings.add_source(File::from(path.to_path_buf()).required(false));
        }

        settings = settings.add_source(
            Environment::with_prefix("NOISE")
                .prefix_separator("_")
                .try_parsing(true),
        );

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Config file location, for display
    pub fn default_path() -> Result<PathBuf> {
        Ok(noise_home()?.join(CONFIG_FILE_NAME))
    }

    /// Backend base URL for the configured mode
    pub fn base_url(&self) -> String {
        let origin = match self.mode {
            BuildMode::Development => &self.dev_origin,
            BuildMode::Production => &self.api_origin,
        };
        format!("{}{}", origin.trim_end_matches('/'), API_PREFIX)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(self.base_url()).with_timeout(self.timeout())
    }
}
