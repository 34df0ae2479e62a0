//! Configuration Management
//!
//! Handles persistent configuration storage for vmsweep, and owns the static
//! zone enumeration the sweep crosses against every project. Zones are
//! read-only configuration handed to the aggregator at construction, never
//! discovered at runtime.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default projects to sweep when none are passed on the command line
    #[serde(default)]
    pub projects: Vec<String>,
    /// Zone list override; when absent the built-in list applies
    #[serde(default)]
    pub zones: Option<Vec<String>>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vmsweep").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Get effective projects (CLI > config > gcloud default)
    pub fn effective_projects(&self, cli_projects: &[String]) -> Vec<String> {
        if !cli_projects.is_empty() {
            return cli_projects.to_vec();
        }
        if !self.projects.is_empty() {
            return self.projects.clone();
        }
        crate::gcp::auth::get_default_project()
            .map(|p| vec![p])
            .unwrap_or_default()
    }

    /// Get effective zones (CLI > config > built-in list)
    pub fn effective_zones(&self, cli_zones: &[String]) -> Vec<String> {
        if !cli_zones.is_empty() {
            return cli_zones.to_vec();
        }
        match &self.zones {
            Some(zones) => zones.clone(),
            None => default_zones(),
        }
    }
}

/// Built-in Compute Engine zone list
///
/// Crossed against every project by the sweep. New zones are picked up by
/// editing the config file rather than waiting for a release.
pub fn default_zones() -> Vec<String> {
    [
        "asia-east1-a",
        "asia-east1-b",
        "asia-east1-c",
        "europe-west1-b",
        "europe-west1-c",
        "europe-west1-d",
        "us-central1-a",
        "us-central1-b",
        "us-central1-c",
        "us-central1-f",
        "us-east1-b",
        "us-east1-c",
        "us-east1-d",
        "us-west1-a",
        "us-west1-b",
    ]
    .iter()
    .map(|z| z.to_string())
    .collect()
}
