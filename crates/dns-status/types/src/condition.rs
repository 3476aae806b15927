//! Status conditions
//!
//! Conditions are the externally visible summary of operator state. Each one
//! carries a tri-state status and the time it last changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tri-state condition status
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

impl ConditionStatus {
    pub fn is_true(self) -> bool {
        self == ConditionStatus::True
    }

    pub fn is_false(self) -> bool {
        self == ConditionStatus::False
    }
}

impl From<bool> for ConditionStatus {
    fn from(value: bool) -> Self {
        if value {
            ConditionStatus::True
        } else {
            ConditionStatus::False
        }
    }
}

impl std::fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionStatus::True => write!(f, "True"),
            ConditionStatus::False => write!(f, "False"),
            ConditionStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Cluster operator condition types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConditionType {
    /// The operand is functional and available in the cluster
    Available,
    /// A rollout of new code or configuration is in progress
    Progressing,
    /// The operand is not in its desired state
    Degraded,
    /// The operator is safe to upgrade
    Upgradeable,
}

impl std::fmt::Display for ConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionType::Available => write!(f, "Available"),
            ConditionType::Progressing => write!(f, "Progressing"),
            ConditionType::Degraded => write!(f, "Degraded"),
            ConditionType::Upgradeable => write!(f, "Upgradeable"),
        }
    }
}

/// A single cluster operator status condition
///
/// Every field takes part in equality, `last_transition_time` included. An
/// unset transition time is the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: ConditionType,

    pub status: ConditionStatus,

    /// Machine-readable CamelCase reason
    #[serde(default)]
    pub reason: String,

    /// Human-readable detail
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub last_transition_time: DateTime<Utc>,
}

impl Condition {
    /// Create a condition with empty reason/message and an epoch transition time
    pub fn new(condition_type: ConditionType, status: ConditionStatus) -> Self {
        Self {
            condition_type,
            status,
            reason: String::new(),
            message: String::new(),
            last_transition_time: DateTime::<Utc>::default(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn at(mut self, last_transition_time: DateTime<Utc>) -> Self {
        self.last_transition_time = last_transition_time;
        self
    }
}
