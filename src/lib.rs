//! vmsweep - concurrent Compute Engine instance sweep
//!
//! Enumerates instances across every configured (project, zone) partition in
//! parallel, tolerating per-partition failures, and returns one
//! deterministically ordered result set.
//!
//! - [`sweep`] - the fan-out/fan-in aggregator and the per-partition listing
//!   seam
//! - [`gcp`] - authenticated transport and project discovery
//! - [`config`] - persistent configuration and the static zone list

pub mod config;
pub mod gcp;
pub mod sweep;
