//! Configuration handling for the forms flow

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::notify::DEFAULT_DISMISS_AFTER;

/// User configuration for the forms flow
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormsConfig {
    /// Mail relay endpoint for contact submissions
    pub relay_endpoint: Option<String>,
    /// Timeout for a single relay request, in seconds
    pub request_timeout_secs: Option<u64>,
    /// Notification auto-dismiss delay, in milliseconds
    pub dismiss_after_ms: Option<u64>,
}

impl FormsConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "alphaseam", "alphaseam-forms")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormsConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Notification auto-dismiss duration, defaulting to 4 seconds
    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DISMISS_AFTER)
    }
}
