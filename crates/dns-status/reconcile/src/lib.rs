//! # DNS Status - Cluster operator status reconciliation
//!
//! Derives the published status of the DNS cluster operator from the observed
//! state of the managed DNS resource and the desired component versions.
//!
//! ## Overview
//!
//! Each reconcile cycle answers three questions:
//!
//! - **Progressing**: is the DNS subsystem still rolling out? See
//!   [`compute_progressing`].
//! - **Versions**: which version vector is published as achieved? See
//!   [`advance_versions`]. The vector only moves once Progressing is `False`,
//!   and then moves as a whole.
//! - **Change detection**: did anything change since the persisted status?
//!   See [`statuses_equal`], which compares every collection as a multiset.
//!
//! These are pure functions. [`compute_status`] assembles a full candidate
//! status and [`StatusReconciler`] writes it through a [`StatusStore`] only
//! when it differs from what is persisted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::Utc;
//! use dns_status::{InMemoryStatusStore, OperatorConfig, StatusReconciler};
//! use dns_status_types::{ConditionStatus, ObservedResourceState};
//!
//! # async fn example() -> dns_status::StatusResult<()> {
//! let config = OperatorConfig::from_env()?;
//! let reconciler = StatusReconciler::new(Arc::new(InMemoryStatusStore::new()));
//!
//! let observed = ObservedResourceState::present(ConditionStatus::True, ConditionStatus::False)
//!     .with_reported_versions(config.desired_versions());
//! let outcome = reconciler.reconcile(&config, &observed, Utc::now()).await?;
//! println!("status {outcome}");
//! # Ok(())
//! # }
//! ```

pub mod conditions;
pub mod config;
pub mod equality;
pub mod error;
pub mod progressing;
pub mod reconciler;
pub mod store;
pub mod versions;

// Re-export main types
pub use conditions::{compute_available, compute_degraded, merge_conditions};
pub use config::OperatorConfig;
pub use equality::statuses_equal;
pub use error::{StatusError, StatusResult};
pub use progressing::compute_progressing;
pub use reconciler::{compute_status, ReconcileOutcome, StatusReconciler};
pub use store::{InMemoryStatusStore, StatusStore};
pub use versions::advance_versions;
