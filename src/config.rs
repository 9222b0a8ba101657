//! Configuration handling for the client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the API base URL
pub const API_BASE_ENV: &str = "QVENT_API_BASE_URL";

/// Default API base URL
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000/api";

/// Delay before leaving a submitted page for the success view
const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// User configuration file contents
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the public event API
    pub api_base_url: Option<String>,
    /// Redirect delay after a successful submission, in milliseconds
    pub redirect_delay_ms: Option<u64>,
    /// Simulated payment delay, in milliseconds
    pub payment_delay_ms: Option<u64>,
}

/// Effective settings after applying overrides
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base_url: String,
    pub redirect_delay: Duration,
    pub payment_delay: Duration,
}

impl ClientConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("app", "qvent", "qvent-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ClientConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolve settings; the base URL comes from the command line, then the
    /// environment, then this file, then the default
    pub fn resolve(&self, cli_base_url: Option<String>, env_base_url: Option<String>) -> Settings {
        let api_base_url = [cli_base_url, env_base_url, self.api_base_url.clone()]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Settings {
            api_base_url,
            redirect_delay: self
                .redirect_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_REDIRECT_DELAY),
            payment_delay: self
                .payment_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(crate::payment::SimulatedGateway::DEFAULT_DELAY),
        }
    }
}
