//! Version vectors
//!
//! The operator publishes one version per tracked component: its own release
//! plus one entry per operand. The whole vector is treated as a single
//! rollout unit.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version published for components that have not been established yet
pub const UNKNOWN_VERSION_VALUE: &str = "0.0.1-snapshot";

/// Names of the tracked components
///
/// Passed explicitly to anything that needs to know the key set of a version
/// vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentNames {
    /// The operator's own release
    pub operator: String,
    /// The DNS-serving workload
    pub coredns: String,
    /// The CLI helper image
    pub openshift_cli: String,
    /// The metrics proxy sidecar image
    pub kube_rbac_proxy: String,
}

impl Default for ComponentNames {
    fn default() -> Self {
        Self {
            operator: "operator".into(),
            coredns: "coredns".into(),
            openshift_cli: "openshift-cli".into(),
            kube_rbac_proxy: "kube-rbac-proxy".into(),
        }
    }
}

impl ComponentNames {
    /// Names in publication order: operator first, then operands
    pub fn all(&self) -> [&str; 4] {
        [
            self.operator.as_str(),
            self.coredns.as_str(),
            self.openshift_cli.as_str(),
            self.kube_rbac_proxy.as_str(),
        ]
    }
}

/// A single component version entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperandVersion {
    pub name: String,
    pub version: String,
}

impl OperandVersion {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.version.is_empty() || self.version == UNKNOWN_VERSION_VALUE
    }
}

/// Old and new vectors cover different component names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("version vector components differ: expected {expected:?}, got {actual:?}")]
pub struct ComponentMismatch {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

/// Ordered list of component versions
///
/// Entry order is kept for publication but carries no meaning: lookups go by
/// name and status equality compares entries as a multiset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionVector(Vec<OperandVersion>);

impl VersionVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vector with every component set to [`UNKNOWN_VERSION_VALUE`]
    pub fn unknown(names: &ComponentNames) -> Self {
        names
            .all()
            .into_iter()
            .map(|name| OperandVersion::new(name, UNKNOWN_VERSION_VALUE))
            .collect()
    }

    /// Append an entry, builder style
    pub fn with(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.0.push(OperandVersion::new(name, version));
        self
    }

    /// Version of the first entry with this name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.version.as_str())
    }

    pub fn entries(&self) -> &[OperandVersion] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OperandVersion> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Distinct component names
    pub fn names(&self) -> BTreeSet<&str> {
        self.0.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Entries of `desired` whose version differs from this vector's
    ///
    /// A component missing here counts as differing.
    pub fn differing<'a>(&self, desired: &'a VersionVector) -> Vec<&'a OperandVersion> {
        desired
            .iter()
            .filter(|want| self.get(&want.name) != Some(want.version.as_str()))
            .collect()
    }

    /// Reject vectors that do not track the same components
    pub fn ensure_same_components(&self, other: &VersionVector) -> Result<(), ComponentMismatch> {
        let expected = self.names();
        let actual = other.names();
        if expected == actual && self.len() == other.len() {
            return Ok(());
        }
        Err(ComponentMismatch {
            expected: expected.into_iter().map(String::from).collect(),
            actual: actual.into_iter().map(String::from).collect(),
        })
    }
}

impl FromIterator<OperandVersion> for VersionVector {
    fn from_iter<I: IntoIterator<Item = OperandVersion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<OperandVersion>> for VersionVector {
    fn from(entries: Vec<OperandVersion>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a VersionVector {
    type Item = &'a OperandVersion;
    type IntoIter = std::slice::Iter<'a, OperandVersion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for VersionVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|entry| format!("{}={}", entry.name, entry.version))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
