//! Progressing condition computation.
//!
//! Summarizes whether the DNS subsystem is still rolling out, from the managed
//! resource's own flags and a comparison of version vectors.

use dns_status_types::{Condition, ConditionStatus, ConditionType, VersionVector};
use tracing::debug;

/// Reason set while the managed resource does not exist.
pub const REASON_MISSING: &str = "DNSMissing";
/// Reason set while the managed resource reports its own rollout.
pub const REASON_RESOURCE_PROGRESSING: &str = "DNSProgressing";
/// Reason set while any component version differs from the desired one.
pub const REASON_UPGRADING: &str = "Upgrading";
/// Reason set when nothing is progressing.
pub const REASON_AS_EXPECTED: &str = "AsExpected";

/// Compute the operator's Progressing condition.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. resource missing: `True`
/// 2. resource reports Progressing=True: `True`
/// 3. resource not Available: `False`
/// 4. any component of `old_versions` differs from `desired_versions`: `True`,
///    otherwise `False`
///
/// An Unknown resource Progressing flag falls through rule 2; an Unknown
/// Available flag is handled like False by rule 3. The returned condition
/// carries the epoch as its transition time.
pub fn compute_progressing(
    exists: bool,
    available: ConditionStatus,
    progressing: ConditionStatus,
    old_versions: &VersionVector,
    desired_versions: &VersionVector,
) -> Condition {
    let condition = if !exists {
        Condition::new(ConditionType::Progressing, ConditionStatus::True)
            .with_reason(REASON_MISSING)
            .with_message("The DNS resource does not exist.")
    } else if progressing.is_true() {
        Condition::new(ConditionType::Progressing, ConditionStatus::True)
            .with_reason(REASON_RESOURCE_PROGRESSING)
            .with_message("The DNS resource is rolling out changes.")
    } else if !available.is_true() {
        Condition::new(ConditionType::Progressing, ConditionStatus::False)
            .with_reason(REASON_AS_EXPECTED)
            .with_message("The DNS resource is not yet available and is not rolling out changes.")
    } else {
        let upgrades = old_versions.differing(desired_versions);
        if upgrades.is_empty() {
            Condition::new(ConditionType::Progressing, ConditionStatus::False)
                .with_reason(REASON_AS_EXPECTED)
                .with_message("Desired and current versions are equal.")
        } else {
            let message = upgrades
                .iter()
                .map(|entry| format!("Upgrading {} to {:?}.", entry.name, entry.version))
                .collect::<Vec<_>>()
                .join(" ");
            Condition::new(ConditionType::Progressing, ConditionStatus::True)
                .with_reason(REASON_UPGRADING)
                .with_message(message)
        }
    };

    debug!(
        exists,
        available = %available,
        progressing = %progressing,
        status = %condition.status,
        reason = %condition.reason,
        "Computed progressing condition"
    );

    condition
}
