//! Status assembly and the write-suppressing reconciler.
//!
//! [`compute_status`] builds the candidate status from one observation.
//! [`StatusReconciler`] compares it with the persisted status and writes only
//! when something changed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dns_status_types::{ClusterOperatorStatus, ObservedResourceState, VersionVector};
use tracing::{debug, info, warn};

use crate::conditions::{compute_available, compute_degraded, merge_conditions};
use crate::config::OperatorConfig;
use crate::equality::statuses_equal;
use crate::error::StatusResult;
use crate::progressing::compute_progressing;
use crate::store::StatusStore;
use crate::versions::advance_versions;

/// What a reconcile pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// A new status was written.
    Updated,
    /// The candidate matched the persisted status; no write was issued.
    Unchanged,
}

impl ReconcileOutcome {
    pub fn is_updated(self) -> bool {
        self == ReconcileOutcome::Updated
    }
}

impl std::fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReconcileOutcome::Updated => write!(f, "updated"),
            ReconcileOutcome::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Build the candidate status for one observation.
///
/// The published vector starts from `old.versions`. An empty vector, or one
/// that tracks different components than `config`, is replaced by the
/// unknown-version vector first. Progressing compares the versions the
/// managed workload reports against the desired ones.
pub fn compute_status(
    config: &OperatorConfig,
    observed: &ObservedResourceState,
    old: &ClusterOperatorStatus,
    now: DateTime<Utc>,
) -> ClusterOperatorStatus {
    let desired = config.desired_versions();
    let published = published_versions(config, &old.versions, &desired);

    let progressing = compute_progressing(
        observed.exists,
        observed.available,
        observed.progressing,
        &observed.reported_versions,
        &desired,
    );
    let versions = advance_versions(&progressing, &published, &desired);

    let conditions = merge_conditions(
        &old.conditions,
        vec![
            compute_available(observed),
            progressing,
            compute_degraded(observed),
        ],
        now,
    );

    ClusterOperatorStatus {
        conditions,
        versions,
        related_objects: config.related_objects(),
    }
}

fn published_versions(
    config: &OperatorConfig,
    old: &VersionVector,
    desired: &VersionVector,
) -> VersionVector {
    if old.is_empty() {
        return VersionVector::unknown(&config.components);
    }

    match old.ensure_same_components(desired) {
        Ok(()) => old.clone(),
        Err(e) => {
            warn!(error = %e, "Published versions do not match configured components, resetting");
            VersionVector::unknown(&config.components)
        }
    }
}

/// Drives one reconcile pass against a status store.
pub struct StatusReconciler {
    store: Arc<dyn StatusStore>,
}

impl StatusReconciler {
    /// Create a new reconciler.
    pub fn new(store: Arc<dyn StatusStore>) -> Self {
        Self { store }
    }

    /// Recompute the status and persist it if it changed.
    pub async fn reconcile(
        &self,
        config: &OperatorConfig,
        observed: &ObservedResourceState,
        now: DateTime<Utc>,
    ) -> StatusResult<ReconcileOutcome> {
        let old = self.store.get_status().await?.unwrap_or_default();
        let candidate = compute_status(config, observed, &old, now);

        if statuses_equal(&old, &candidate) {
            debug!(resource = %config.resource_name, "Status unchanged, skipping write");
            return Ok(ReconcileOutcome::Unchanged);
        }

        self.store.update_status(&candidate).await?;

        info!(
            resource = %config.resource_name,
            versions = %candidate.versions,
            conditions = candidate.conditions.len(),
            "Updated cluster operator status"
        );

        Ok(ReconcileOutcome::Updated)
    }
}
