//! GCP Client
//!
//! Bundles authentication and HTTP functionality. Unlike a session-oriented
//! client this one pins no project or zone: every partition listing passes
//! its own (project, zone) pair, so concurrent calls share nothing mutable.

use super::auth::GcpCredentials;
use super::http::GcpHttpClient;
use anyhow::{Context, Result};
use serde_json::Value;

/// Default Compute Engine API base
pub const COMPUTE_BASE: &str = "https://compute.googleapis.com/compute/v1";

/// Default Resource Manager API base
pub const RESOURCEMANAGER_BASE: &str = "https://cloudresourcemanager.googleapis.com/v1";

/// Main GCP client
#[derive(Clone)]
pub struct GcpClient {
    pub credentials: GcpCredentials,
    pub http: GcpHttpClient,
    compute_base: String,
    resourcemanager_base: String,
}

impl GcpClient {
    /// Create a new GCP client
    pub async fn new() -> Result<Self> {
        let credentials = GcpCredentials::new()
            .await
            .context("Failed to initialize GCP credentials")?;

        let http = GcpHttpClient::new()?;

        Ok(Self {
            credentials,
            http,
            compute_base: COMPUTE_BASE.to_string(),
            resourcemanager_base: RESOURCEMANAGER_BASE.to_string(),
        })
    }

    /// Override the API base URLs, e.g. to point at a mock server
    pub fn with_base_urls(mut self, compute_base: &str, resourcemanager_base: &str) -> Self {
        self.compute_base = compute_base.trim_end_matches('/').to_string();
        self.resourcemanager_base = resourcemanager_base.trim_end_matches('/').to_string();
        self
    }

    /// Get the current access token
    pub async fn get_token(&self) -> Result<String> {
        self.credentials.get_token().await
    }

    /// Make a GET request to a GCP API
    pub async fn get(&self, url: &str) -> Result<Value> {
        let token = self.get_token().await?;
        self.http.get(url, &token).await
    }

    /// Compute Engine API base currently in effect
    pub fn compute_base(&self) -> &str {
        &self.compute_base
    }

    /// Build the zonal instances listing URL for one (project, zone) partition
    pub fn instances_url(&self, project_id: &str, zone: &str) -> String {
        instances_url(&self.compute_base, project_id, zone)
    }

    /// Build Resource Manager API URL
    pub fn resourcemanager_url(&self, path: &str) -> String {
        format!("{}/{}", self.resourcemanager_base, path)
    }
}

/// Zonal instances listing URL from an explicit base
pub fn instances_url(base: &str, project_id: &str, zone: &str) -> String {
    format!(
        "{}/projects/{}/zones/{}/instances",
        base.trim_end_matches('/'),
        project_id,
        zone
    )
}

/// Format a GCP API error for display
pub fn format_gcp_error(error: &anyhow::Error) -> String {
    super::http::format_gcp_error(error)
}
