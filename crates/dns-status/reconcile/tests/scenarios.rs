//! End-to-end reconcile scenarios for the DNS operator status.

use chrono::{TimeZone, Utc};
use dns_status::{advance_versions, compute_progressing, statuses_equal};
use dns_status_types::{
    ClusterOperatorStatus, Condition, ConditionStatus, ConditionType, VersionVector,
};

fn versions(operator: &str, operand: &str) -> VersionVector {
    VersionVector::new()
        .with("operator", operator)
        .with("coredns", operand)
}

#[test]
fn missing_resource_is_progressing() {
    for (old, desired) in [
        (versions("v1", "dns-v1"), versions("v1", "dns-v1")),
        (versions("v1", "dns-v1"), versions("v2", "dns-v2")),
        (VersionVector::new(), VersionVector::new()),
    ] {
        let condition = compute_progressing(
            false,
            ConditionStatus::Unknown,
            ConditionStatus::Unknown,
            &old,
            &desired,
        );
        assert_eq!(condition.status, ConditionStatus::True);
    }
}

#[test]
fn operator_upgrade_holds_published_versions() {
    let old = versions("v1", "dns-v1");
    let desired = versions("v2", "dns-v1");

    let progressing = compute_progressing(
        true,
        ConditionStatus::True,
        ConditionStatus::False,
        &old,
        &desired,
    );
    assert_eq!(progressing.status, ConditionStatus::True);
    assert_eq!(advance_versions(&progressing, &old, &desired), old);
}

#[test]
fn converged_publishes_desired_versions() {
    let old = versions("v1", "dns-v1");
    let desired = versions("v1", "dns-v1");

    let progressing = compute_progressing(
        true,
        ConditionStatus::True,
        ConditionStatus::False,
        &old,
        &desired,
    );
    assert_eq!(progressing.status, ConditionStatus::False);
    assert_eq!(advance_versions(&progressing, &old, &desired), desired);
}

#[test]
fn swapped_versions_are_equal() {
    let a = ClusterOperatorStatus {
        versions: versions("v1", "dns-v1"),
        ..Default::default()
    };
    let b = ClusterOperatorStatus {
        versions: VersionVector::new()
            .with("coredns", "dns-v1")
            .with("operator", "v1"),
        ..Default::default()
    };
    assert!(statuses_equal(&a, &b));
}

#[test]
fn transition_time_difference_is_detected() {
    let condition = |secs| {
        Condition::new(ConditionType::Available, ConditionStatus::True)
            .at(Utc.timestamp_opt(secs, 0).unwrap())
    };
    let a = ClusterOperatorStatus {
        conditions: vec![condition(0)],
        ..Default::default()
    };
    let b = ClusterOperatorStatus {
        conditions: vec![condition(1)],
        ..Default::default()
    };
    assert!(!statuses_equal(&a, &b));
}

#[test]
fn duplicated_condition_is_detected() {
    let available = Condition::new(ConditionType::Available, ConditionStatus::Unknown)
        .with_message("foo");
    let once = ClusterOperatorStatus {
        conditions: vec![available.clone()],
        ..Default::default()
    };
    let twice = ClusterOperatorStatus {
        conditions: vec![available.clone(), available],
        ..Default::default()
    };
    assert!(!statuses_equal(&once, &twice));
}
