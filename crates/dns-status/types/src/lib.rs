//! DNS Status Types - data model for cluster operator status reconciliation
//!
//! The DNS operator publishes a `ClusterOperatorStatus` that summarizes the
//! rollout state of the cluster DNS subsystem. This crate holds the value
//! types shared by the reconciliation core and its host:
//!
//! - **ConditionStatus**: explicit tri-state (`True`, `False`, `Unknown`)
//! - **Condition**: a typed status condition with its transition time
//! - **VersionVector**: per-component version identifiers published as a unit
//! - **ClusterOperatorStatus**: the snapshot compared and persisted each cycle
//! - **ObservedResourceState**: what the watch layer saw on the managed resource
//!
//! All types are plain values. Nothing here holds process-wide state.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod condition;
pub mod observed;
pub mod status;
pub mod version;

// Re-export main types
pub use condition::{Condition, ConditionStatus, ConditionType};
pub use observed::ObservedResourceState;
pub use status::{ClusterOperatorStatus, ObjectReference};
pub use version::{
    ComponentMismatch, ComponentNames, OperandVersion, VersionVector, UNKNOWN_VERSION_VALUE,
};
