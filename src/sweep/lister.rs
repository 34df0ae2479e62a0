//! Partition Lister
//!
//! One listing call covers exactly one (project, zone) partition and returns
//! the first page of instances. Multi-page continuation is not followed at
//! this layer; the token is carried through for callers that want it.

use crate::gcp::client::{instances_url, GcpClient};
use crate::gcp::http::GcpHttpClient;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// First page of a single (project, zone) listing
#[derive(Debug, Clone, Default)]
pub struct InstancePage {
    /// Opaque instance records, carried through uninspected
    pub instances: Vec<Value>,
    /// Continuation token; `None` means no further pages
    pub next_page_token: Option<String>,
}

/// The listing seam the aggregator fans out over
///
/// Implementations must be safe to invoke concurrently for distinct
/// partitions with no shared mutable state between calls, and are
/// responsible for bounding their own latency: the aggregator imposes no
/// timeout and waits for every dispatched partition to report.
///
/// An `Err` means the partition failed; `Ok` with an empty page means the
/// partition holds no instances.
#[async_trait]
pub trait InstanceLister: Send + Sync {
    async fn list_instances(&self, project_id: &str, zone: &str) -> Result<InstancePage>;
}

/// Production lister over the Compute Engine REST API
pub struct ComputeInstanceLister {
    client: GcpClient,
}

impl ComputeInstanceLister {
    pub fn new(client: GcpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InstanceLister for ComputeInstanceLister {
    async fn list_instances(&self, project_id: &str, zone: &str) -> Result<InstancePage> {
        let token = self.client.get_token().await?;
        fetch_instance_page(
            &self.client.http,
            self.client.compute_base(),
            &token,
            project_id,
            zone,
        )
        .await
    }
}

/// Fetch one page of instances from a zonal `instances.list` endpoint
///
/// Kept free of the credential machinery so HTTP-level tests can drive it
/// against a mock server with a fixed token.
pub async fn fetch_instance_page(
    http: &GcpHttpClient,
    base: &str,
    token: &str,
    project_id: &str,
    zone: &str,
) -> Result<InstancePage> {
    let url = instances_url(base, project_id, zone);
    let response = http.get(&url, token).await?;
    Ok(parse_instance_page(&response))
}

/// Extract items and continuation token from an `instances.list` response
pub fn parse_instance_page(response: &Value) -> InstancePage {
    let instances = response
        .get("items")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();

    let next_page_token = response
        .get("nextPageToken")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    InstancePage {
        instances,
        next_page_token,
    }
}
