//! Instance sweep
//!
//! The heart of the crate: enumerate Compute Engine instances across every
//! (project, zone) partition concurrently and fold the outcomes into one
//! deterministically ordered result set.
//!
//! # Module Structure
//!
//! - [`lister`] - The per-partition listing seam and its Compute Engine
//!   implementation
//! - [`aggregator`] - Fan-out/fan-in across projects × zones with per-zone
//!   failure isolation
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use crate::gcp::client::GcpClient;
//! use crate::sweep::{ComputeInstanceLister, Sweeper};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = GcpClient::new().await?;
//!     let lister = Arc::new(ComputeInstanceLister::new(client));
//!     let sweeper = Sweeper::new(lister, crate::config::default_zones());
//!     let listings = sweeper.list_all(&["my-project".to_string()]).await?;
//!     for listing in &listings {
//!         println!("{}/{}: {:?}", listing.project_id, listing.zone, listing.outcome);
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod lister;

pub use aggregator::{partition_order, ListOutcome, Sweeper, ZoneListing};
pub use lister::{
    fetch_instance_page, parse_instance_page, ComputeInstanceLister, InstanceLister, InstancePage,
};
