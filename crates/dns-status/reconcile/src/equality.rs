//! Status change detection.
//!
//! The host only writes a new status when [`statuses_equal`] reports a
//! difference from the persisted one.

use dns_status_types::ClusterOperatorStatus;

/// Compare two status snapshots.
///
/// Conditions, versions and related objects are each compared as
/// order-independent multisets of full records. Duplicates count, and every
/// condition field including the transition time must match.
pub fn statuses_equal(a: &ClusterOperatorStatus, b: &ClusterOperatorStatus) -> bool {
    same_multiset(&a.conditions, &b.conditions)
        && same_multiset(a.versions.entries(), b.versions.entries())
        && same_multiset(&a.related_objects, &b.related_objects)
}

/// Multiset equality via sorted copies of the references.
fn same_multiset<T: Ord>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut a: Vec<&T> = a.iter().collect();
    let mut b: Vec<&T> = b.iter().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dns_status_types::{
        Condition, ConditionStatus, ConditionType, ObjectReference, VersionVector,
    };

    fn with_conditions(conditions: Vec<Condition>) -> ClusterOperatorStatus {
        ClusterOperatorStatus {
            conditions,
            ..Default::default()
        }
    }

    fn with_versions(pairs: &[(&str, &str)]) -> ClusterOperatorStatus {
        ClusterOperatorStatus {
            versions: pairs
                .iter()
                .fold(VersionVector::new(), |v, (name, version)| {
                    v.with(*name, *version)
                }),
            ..Default::default()
        }
    }

    fn with_related(names: &[&str]) -> ClusterOperatorStatus {
        ClusterOperatorStatus {
            related_objects: names.iter().map(|name| ObjectReference::named(*name)).collect(),
            ..Default::default()
        }
    }

    fn condition(condition_type: ConditionType) -> Condition {
        Condition::new(condition_type, ConditionStatus::Unknown)
    }

    #[test]
    fn test_statuses_equal_table() {
        let cases = vec![
            (
                "zero-valued statuses are equal",
                true,
                ClusterOperatorStatus::default(),
                ClusterOperatorStatus::default(),
            ),
            (
                "empty and default collections are equal",
                true,
                with_conditions(Vec::new()),
                ClusterOperatorStatus::default(),
            ),
            (
                "no change in versions",
                true,
                with_versions(&[("operator", "v1"), ("coredns", "v2")]),
                with_versions(&[("operator", "v1"), ("coredns", "v2")]),
            ),
            (
                "condition last transition time is not ignored",
                false,
                with_conditions(vec![Condition::new(
                    ConditionType::Available,
                    ConditionStatus::True,
                )
                .at(Utc.timestamp_opt(0, 0).unwrap())]),
                with_conditions(vec![Condition::new(
                    ConditionType::Available,
                    ConditionStatus::True,
                )
                .at(Utc.timestamp_opt(1, 0).unwrap())]),
            ),
            (
                "order of versions does not matter",
                true,
                with_versions(&[("operator", "v1"), ("coredns", "v2")]),
                with_versions(&[("coredns", "v2"), ("operator", "v1")]),
            ),
            (
                "missing related objects",
                false,
                with_related(&["openshift-dns", "default"]),
                with_related(&["default"]),
            ),
            (
                "extra related objects",
                false,
                with_related(&["default"]),
                with_related(&["openshift-dns", "default"]),
            ),
            (
                "order of related objects does not matter",
                true,
                with_related(&["openshift-dns", "default"]),
                with_related(&["default", "openshift-dns"]),
            ),
            (
                "condition reason differs",
                false,
                with_conditions(vec![Condition::new(
                    ConditionType::Available,
                    ConditionStatus::False,
                )
                .with_reason("foo")]),
                with_conditions(vec![Condition::new(
                    ConditionType::Available,
                    ConditionStatus::False,
                )
                .with_reason("bar")]),
            ),
            (
                "duplicate with single condition",
                false,
                with_conditions(vec![condition(ConditionType::Available).with_message("foo")]),
                with_conditions(vec![
                    condition(ConditionType::Available).with_message("foo"),
                    condition(ConditionType::Available).with_message("foo"),
                ]),
            ),
            (
                "duplicate with multiple conditions",
                false,
                with_conditions(vec![
                    condition(ConditionType::Available),
                    condition(ConditionType::Progressing),
                    condition(ConditionType::Available),
                ]),
                with_conditions(vec![
                    condition(ConditionType::Progressing),
                    condition(ConditionType::Available),
                    condition(ConditionType::Progressing),
                ]),
            ),
        ];

        for (description, expected, a, b) in cases {
            assert_eq!(statuses_equal(&a, &b), expected, "{description}");
            assert_eq!(statuses_equal(&b, &a), expected, "{description} (swapped)");
        }
    }

    #[test]
    fn test_duplicate_versions_are_counted() {
        let once = with_versions(&[("operator", "v1"), ("coredns", "v2")]);
        let twice = with_versions(&[("operator", "v1"), ("operator", "v1")]);
        assert!(!statuses_equal(&once, &twice));
    }
}
