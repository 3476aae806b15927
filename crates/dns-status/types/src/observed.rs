//! Observed state of the managed DNS resource
//!
//! Rebuilt by the watch layer on every reconcile tick and never persisted.

use serde::{Deserialize, Serialize};

use crate::condition::ConditionStatus;
use crate::version::VersionVector;

/// Snapshot of the managed resource's own condition flags
///
/// The flags are only meaningful when `exists` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedResourceState {
    pub exists: bool,
    pub available: ConditionStatus,
    pub progressing: ConditionStatus,
    pub degraded: ConditionStatus,

    /// Versions the managed workload reports as rolled out
    pub reported_versions: VersionVector,
}

impl ObservedResourceState {
    /// The managed resource was not found
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn present(available: ConditionStatus, progressing: ConditionStatus) -> Self {
        Self {
            exists: true,
            available,
            progressing,
            ..Self::default()
        }
    }

    pub fn with_degraded(mut self, degraded: ConditionStatus) -> Self {
        self.degraded = degraded;
        self
    }

    pub fn with_reported_versions(mut self, versions: VersionVector) -> Self {
        self.reported_versions = versions;
        self
    }
}
