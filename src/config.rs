//! Configuration handling for the landing page

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default simulated request latency
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
/// Default toast lifetime
const DEFAULT_TOAST_DURATION_MS: u64 = 5000;
/// Default number of toasts visible at once
const DEFAULT_TOAST_LIMIT: usize = 1;

/// Outcome forced on the simulated submission boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulatedFailure {
    Rejected,
    Unavailable,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LandingConfig {
    /// Simulated submission latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Make every simulated submission fail
    pub simulate_failure: Option<SimulatedFailure>,
    /// How long a toast stays visible, in milliseconds
    pub toast_duration_ms: Option<u64>,
    /// Maximum number of toasts on screen
    pub toast_limit: Option<usize>,
}

impl LandingConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "udm", "udm-contact")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: LandingConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration, logging and falling back to defaults on error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            Self::default()
        })
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }

    pub fn toast_limit(&self) -> usize {
        self.toast_limit.unwrap_or(DEFAULT_TOAST_LIMIT).max(1)
    }
}
