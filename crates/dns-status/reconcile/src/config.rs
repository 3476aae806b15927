//! Operator configuration.
//!
//! Supplies the desired version of every tracked component. A config value is
//! immutable and is passed into each reconcile call.

use std::path::Path;

use dns_status_types::{ComponentNames, ObjectReference, VersionVector, UNKNOWN_VERSION_VALUE};
use serde::{Deserialize, Serialize};

use crate::error::{StatusError, StatusResult};

/// Environment variable carrying the operator release version.
pub const RELEASE_VERSION_ENV: &str = "RELEASE_VERSION";
/// Environment variable carrying the CoreDNS image.
pub const COREDNS_IMAGE_ENV: &str = "IMAGE";
/// Environment variable carrying the OpenShift CLI image.
pub const OPENSHIFT_CLI_IMAGE_ENV: &str = "OPENSHIFT_CLI_IMAGE";
/// Environment variable carrying the kube-rbac-proxy image.
pub const KUBE_RBAC_PROXY_IMAGE_ENV: &str = "KUBE_RBAC_PROXY_IMAGE";

/// Desired state for the DNS operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorConfig {
    /// Release version of the operator itself.
    #[serde(default = "unknown_version")]
    pub operator_release_version: String,

    /// Image of the DNS-serving workload.
    pub coredns_image: String,

    /// Image of the CLI helper.
    pub openshift_cli_image: String,

    /// Image of the metrics proxy sidecar.
    pub kube_rbac_proxy_image: String,

    /// Name of the managed DNS resource.
    #[serde(default = "default_resource_name")]
    pub resource_name: String,

    /// Namespace the operator runs in.
    #[serde(default = "default_operator_namespace")]
    pub operator_namespace: String,

    /// Namespace the operands run in.
    #[serde(default = "default_operand_namespace")]
    pub operand_namespace: String,

    /// Names under which each component's version is published.
    #[serde(default)]
    pub components: ComponentNames,
}

fn unknown_version() -> String {
    UNKNOWN_VERSION_VALUE.to_string()
}

fn default_resource_name() -> String {
    "default".to_string()
}

fn default_operator_namespace() -> String {
    "openshift-dns-operator".to_string()
}

fn default_operand_namespace() -> String {
    "openshift-dns".to_string()
}

impl OperatorConfig {
    /// Create a config with default names and namespaces.
    pub fn new(
        operator_release_version: impl Into<String>,
        coredns_image: impl Into<String>,
        openshift_cli_image: impl Into<String>,
        kube_rbac_proxy_image: impl Into<String>,
    ) -> Self {
        Self {
            operator_release_version: operator_release_version.into(),
            coredns_image: coredns_image.into(),
            openshift_cli_image: openshift_cli_image.into(),
            kube_rbac_proxy_image: kube_rbac_proxy_image.into(),
            resource_name: default_resource_name(),
            operator_namespace: default_operator_namespace(),
            operand_namespace: default_operand_namespace(),
            components: ComponentNames::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> StatusResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StatusError::Config(format!(
                "config file {} does not exist",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| StatusError::Config(e.to_string()))
    }

    /// Build configuration from the process environment.
    pub fn from_env() -> StatusResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// A missing release version falls back to [`UNKNOWN_VERSION_VALUE`];
    /// every image is required.
    pub fn from_lookup<F>(lookup: F) -> StatusResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| StatusError::Config(format!("{key} must be set")))
        };

        let release = lookup(RELEASE_VERSION_ENV)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(unknown_version);

        Ok(Self::new(
            release,
            required(COREDNS_IMAGE_ENV)?,
            required(OPENSHIFT_CLI_IMAGE_ENV)?,
            required(KUBE_RBAC_PROXY_IMAGE_ENV)?,
        ))
    }

    /// The version vector this operator wants published once rolled out.
    pub fn desired_versions(&self) -> VersionVector {
        VersionVector::new()
            .with(&self.components.operator, &self.operator_release_version)
            .with(&self.components.coredns, &self.coredns_image)
            .with(&self.components.openshift_cli, &self.openshift_cli_image)
            .with(&self.components.kube_rbac_proxy, &self.kube_rbac_proxy_image)
    }

    /// Objects published as related to the cluster operator.
    pub fn related_objects(&self) -> Vec<ObjectReference> {
        vec![
            ObjectReference::new("", "namespaces", "", &self.operator_namespace),
            ObjectReference::new("", "namespaces", "", &self.operand_namespace),
            ObjectReference::new("operator.openshift.io", "dnses", "", &self.resource_name),
        ]
    }
}
