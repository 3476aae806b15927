//! Available/Degraded conditions and condition merging.

use chrono::{DateTime, Utc};
use dns_status_types::{Condition, ConditionStatus, ConditionType, ObservedResourceState};

/// Reason set on Available/Degraded while the managed resource does not exist.
pub const REASON_DOES_NOT_EXIST: &str = "DNSDoesNotExist";
/// Reason set on Available while the managed resource is unavailable.
pub const REASON_UNAVAILABLE: &str = "DNSUnavailable";
/// Reason set on Degraded while the managed resource reports degradation.
pub const REASON_DEGRADED: &str = "DNSDegraded";

/// Mirror the managed resource's availability.
pub fn compute_available(observed: &ObservedResourceState) -> Condition {
    if !observed.exists {
        Condition::new(ConditionType::Available, ConditionStatus::False)
            .with_reason(REASON_DOES_NOT_EXIST)
            .with_message("The DNS resource does not exist.")
    } else if observed.available.is_true() {
        Condition::new(ConditionType::Available, ConditionStatus::True)
            .with_reason("AsExpected")
            .with_message("The DNS resource is available.")
    } else {
        Condition::new(ConditionType::Available, ConditionStatus::False)
            .with_reason(REASON_UNAVAILABLE)
            .with_message("The DNS resource is not available.")
    }
}

/// Mirror the managed resource's degradation.
pub fn compute_degraded(observed: &ObservedResourceState) -> Condition {
    if !observed.exists {
        Condition::new(ConditionType::Degraded, ConditionStatus::True)
            .with_reason(REASON_DOES_NOT_EXIST)
            .with_message("The DNS resource does not exist.")
    } else if observed.degraded.is_true() {
        Condition::new(ConditionType::Degraded, ConditionStatus::True)
            .with_reason(REASON_DEGRADED)
            .with_message("The DNS resource is degraded.")
    } else {
        Condition::new(ConditionType::Degraded, ConditionStatus::False)
            .with_reason("AsExpected")
            .with_message("The DNS resource is not degraded.")
    }
}

/// Merge freshly computed conditions into the existing list.
///
/// An update keeps the existing transition time when its status did not
/// change and gets `now` otherwise. Existing conditions of types not present
/// in `updates` are kept in place; new types are appended.
pub fn merge_conditions(
    existing: &[Condition],
    updates: Vec<Condition>,
    now: DateTime<Utc>,
) -> Vec<Condition> {
    let mut merged = existing.to_vec();

    for mut update in updates {
        match merged
            .iter()
            .position(|current| current.condition_type == update.condition_type)
        {
            Some(index) => {
                let current = &mut merged[index];
                update.last_transition_time = if current.status == update.status {
                    current.last_transition_time
                } else {
                    now
                };
                *current = update;
            }
            None => {
                update.last_transition_time = now;
                merged.push(update);
            }
        }
    }

    merged
}
