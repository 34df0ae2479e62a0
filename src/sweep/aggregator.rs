//! Sweep Aggregator
//!
//! Fans one listing task out per (project, zone) partition, converges every
//! outcome, and returns a stably sorted union. A failing partition becomes a
//! [`ListOutcome::Failed`] entry under its own key; it never aborts sibling
//! partitions and never fails the sweep itself.

use super::lister::{InstanceLister, InstancePage};
use anyhow::Result;
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Outcome of one partition listing; exactly one variant holds per partition
#[derive(Debug)]
pub enum ListOutcome {
    /// First page of instances plus the continuation token the API returned
    Page(InstancePage),
    /// The listing call failed; sibling partitions are unaffected
    Failed(anyhow::Error),
}

impl ListOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ListOutcome::Failed(_))
    }

    pub fn page(&self) -> Option<&InstancePage> {
        match self {
            ListOutcome::Page(page) => Some(page),
            ListOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        match self {
            ListOutcome::Page(_) => None,
            ListOutcome::Failed(err) => Some(err),
        }
    }
}

/// One partition's result, keyed by the (project, zone) pair that produced it
///
/// The key is attached to failures too, so callers can tell which partition
/// failed and re-drive it with a narrowed sweep if they want to.
#[derive(Debug)]
pub struct ZoneListing {
    pub project_id: String,
    pub zone: String,
    pub outcome: ListOutcome,
}

/// Total order on partitions: project ascending, then zone ascending
///
/// Byte-lexicographic on both components, applicable to failures as well
/// since every listing carries its key.
pub fn partition_order(a: &ZoneListing, b: &ZoneListing) -> Ordering {
    a.project_id
        .cmp(&b.project_id)
        .then_with(|| a.zone.cmp(&b.zone))
}

/// Concurrent instance sweep across projects × zones
///
/// The zone list is read-only configuration injected at construction; the
/// sweeper never discovers zones at runtime.
pub struct Sweeper {
    lister: Arc<dyn InstanceLister>,
    zones: Vec<String>,
}

impl Sweeper {
    pub fn new(lister: Arc<dyn InstanceLister>, zones: Vec<String>) -> Self {
        Self { lister, zones }
    }

    /// Zones this sweeper crosses against every project
    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    /// List instances across every (project, zone) partition
    ///
    /// Dispatches |projects| × |zones| listing tasks; duplicate project
    /// entries are not deduplicated and each dispatches its own partition.
    /// Returns one entry per partition, sorted by (project, zone), only
    /// after every task has reported. An empty project or zone set yields
    /// `Ok(vec![])`.
    ///
    /// The only top-level error is a malformed project ID, raised before any
    /// dispatch. Partition failures degrade to `ListOutcome::Failed` entries.
    /// No deadline is imposed on partition calls: a hung lister delays the
    /// whole sweep (see [`InstanceLister`]).
    pub async fn list_all(&self, projects: &[String]) -> Result<Vec<ZoneListing>> {
        for project in projects {
            validate_project_arg(project)?;
        }

        let mut tasks: JoinSet<ZoneListing> = JoinSet::new();

        for project in projects {
            for zone in &self.zones {
                let lister = Arc::clone(&self.lister);
                let project = project.clone();
                let zone = zone.clone();

                tasks.spawn(async move {
                    let outcome = match lister.list_instances(&project, &zone).await {
                        Ok(page) => {
                            tracing::debug!(
                                "listed {}/{}: {} instances",
                                project,
                                zone,
                                page.instances.len()
                            );
                            ListOutcome::Page(page)
                        }
                        Err(err) => {
                            tracing::warn!("listing {}/{} failed: {:#}", project, zone, err);
                            ListOutcome::Failed(err)
                        }
                    };

                    ZoneListing {
                        project_id: project,
                        zone,
                        outcome,
                    }
                });
            }
        }

        // Draining the set until exhaustion is the convergence point: every
        // spawned partition reports exactly once before sorting starts.
        let mut results = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(listing) => results.push(listing),
                Err(err) => tracing::warn!("partition task aborted: {}", err),
            }
        }

        results.sort_by(partition_order);
        Ok(results)
    }
}

/// Reject project IDs that cannot name a partition
///
/// Deliberately looser than the GCP project-ID format rules applied to
/// ambient discovery: callers may sweep short synthetic IDs, but an empty or
/// whitespace-bearing ID is a caller bug surfaced before any dispatch.
fn validate_project_arg(project_id: &str) -> Result<()> {
    if project_id.is_empty() {
        anyhow::bail!("project ID must not be empty");
    }
    if project_id
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        anyhow::bail!(
            "project ID {:?} contains whitespace or control characters",
            project_id
        );
    }
    Ok(())
}
