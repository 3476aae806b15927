//! Cluster operator status snapshot
//!
//! The unit that is compared for change detection and persisted by the host.

use serde::{Deserialize, Deserializer, Serialize};

use crate::condition::{Condition, ConditionType};
use crate::version::VersionVector;

/// Reference to an object the operator manages or depends on
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(default)]
pub struct ObjectReference {
    pub group: String,
    pub resource: String,
    pub namespace: String,
    pub name: String,
}

impl ObjectReference {
    pub fn new(
        group: impl Into<String>,
        resource: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            resource: resource.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Reference carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Published status of the DNS cluster operator
///
/// A `null` collection on the wire decodes as empty, so the two
/// representations compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterOperatorStatus {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub conditions: Vec<Condition>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub versions: VersionVector,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub related_objects: Vec<ObjectReference>,
}

impl ClusterOperatorStatus {
    /// First condition of the given type
    pub fn condition(&self, condition_type: ConditionType) -> Option<&Condition> {
        self.conditions
            .iter()
            .find(|condition| condition.condition_type == condition_type)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
