//! GCP API interaction module
//!
//! This module provides the plumbing for talking to Google Cloud Platform
//! APIs: authentication, HTTP client, and project discovery. The sweep core
//! consumes it only through the instance-lister seam in [`crate::sweep`].
//!
//! # Module Structure
//!
//! - [`auth`] - GCP authentication using Application Default Credentials
//! - [`client`] - Client bundle and API URL construction
//! - [`http`] - HTTP utilities for REST API calls
//! - [`projects`] - Project discovery via Resource Manager
//!
//! # Example
//!
//! ```ignore
//! use crate::gcp::client::GcpClient;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = GcpClient::new().await?;
//!     let page = client.get(&client.instances_url("my-project", "us-central1-a")).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod http;
pub mod projects;
