//! Status store seam.
//!
//! The host's API client implements [`StatusStore`]; the in-memory store is
//! used by tests and embedders without a cluster.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dns_status_types::ClusterOperatorStatus;
use tokio::sync::RwLock;

use crate::error::{StatusError, StatusResult};

/// Trait for persisting the cluster operator status.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Load the persisted status, if any has been written.
    async fn get_status(&self) -> StatusResult<Option<ClusterOperatorStatus>>;

    /// Persist a new status.
    async fn update_status(&self, status: &ClusterOperatorStatus) -> StatusResult<()>;
}

/// In-memory status store that counts writes.
#[derive(Debug, Default)]
pub struct InMemoryStatusStore {
    status: RwLock<Option<ClusterOperatorStatus>>,
    writes: AtomicU64,
    fail_writes: bool,
}

impl InMemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already persisted status.
    pub fn with_status(status: ClusterOperatorStatus) -> Self {
        Self {
            status: RwLock::new(Some(status)),
            ..Self::default()
        }
    }

    /// Store whose writes always fail.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Option<ClusterOperatorStatus> {
        self.status.read().await.clone()
    }
}

#[async_trait]
impl StatusStore for InMemoryStatusStore {
    async fn get_status(&self) -> StatusResult<Option<ClusterOperatorStatus>> {
        Ok(self.status.read().await.clone())
    }

    async fn update_status(&self, status: &ClusterOperatorStatus) -> StatusResult<()> {
        if self.fail_writes {
            return Err(StatusError::Store("simulated write failure".to_string()));
        }

        *self.status.write().await = Some(status.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
