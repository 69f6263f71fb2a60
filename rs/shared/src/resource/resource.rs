use serde::{Deserialize, Serialize};
use std::fmt;

/// One pollable resource type under the monitored group/version.
///
/// Resolved once at startup and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKind {
    pub group: String,
    pub version: String,
    /// CamelCase object kind, e.g. "SBOMSummary".
    pub kind: String,
    /// Plural resource name as it appears on the wire, e.g. "sbomsummaries".
    pub plural: String,
}

impl ResourceKind {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
            plural: plural.into(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}/{}", self.plural, self.group, self.version)
    }
}

/// Namespace and name of one instance at the moment it was listed.
///
/// An empty namespace means the object is cluster-scoped.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectIdentity {
    pub namespace: String,
    pub name: String,
}

impl ObjectIdentity {
    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn cluster_scoped(name: impl Into<String>) -> Self {
        Self {
            namespace: String::new(),
            name: name.into(),
        }
    }

    pub fn is_cluster_scoped(&self) -> bool {
        self.namespace.is_empty()
    }
}

impl fmt::Display for ObjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cluster_scoped() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}/{}", self.namespace, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ObjectIdentity, ResourceKind};

    #[test]
    fn kind_display_names_the_resource() {
        let kind = ResourceKind::new("spdx.softwarecomposition.kubescape.io", "v1beta1", "SBOM", "sboms");
        assert_eq!(kind.to_string(), "sboms.spdx.softwarecomposition.kubescape.io/v1beta1");
    }

    #[test]
    fn namespaced_identity_display() {
        let identity = ObjectIdentity::namespaced("ns1", "a");
        assert!(!identity.is_cluster_scoped());
        assert_eq!(identity.to_string(), "ns1/a");
    }

    #[test]
    fn cluster_scoped_identity_display() {
        let identity = ObjectIdentity::cluster_scoped("node-1");
        assert!(identity.is_cluster_scoped());
        assert_eq!(identity.to_string(), "node-1");
    }
}
