use std::future::Future;

use kube::api::{ApiResource, DynamicObject, GroupVersionKind, ListParams};
use kube::{Api, Client};

use shared::resource::{ObjectIdentity, ResourceKind};

/// Full body fetched for one object, valid only for the cycle that
/// fetched it. Nothing downstream retains it.
#[derive(Clone, Debug)]
pub struct ObservedObject {
    pub identity: ObjectIdentity,
    pub body: DynamicObject,
}

/// The poller's view of the API server.
pub trait ApiGateway {
    /// List identities of every instance of the kind, cluster-wide.
    fn list(
        &self,
        kind: &ResourceKind,
    ) -> impl Future<Output = Result<Vec<ObjectIdentity>, kube::Error>> + Send;

    /// Fetch one instance's full body by namespace and name.
    fn get(
        &self,
        kind: &ResourceKind,
        identity: &ObjectIdentity,
    ) -> impl Future<Output = Result<ObservedObject, kube::Error>> + Send;
}

#[derive(Clone)]
pub struct KubeApiGateway {
    client: Client,
}

impl KubeApiGateway {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api_for(&self, kind: &ResourceKind, namespace: Option<&str>) -> Api<DynamicObject> {
        let resource = api_resource(kind);
        match namespace {
            Some(namespace) if !namespace.is_empty() => {
                Api::namespaced_with(self.client.clone(), namespace, &resource)
            }
            _ => Api::all_with(self.client.clone(), &resource),
        }
    }

    async fn list(&self, kind: &ResourceKind) -> Result<Vec<ObjectIdentity>, kube::Error> {
        let list = self.api_for(kind, None).list(&ListParams::default()).await?;
        Ok(list.items.into_iter().map(identity_of).collect())
    }

    async fn get(
        &self,
        kind: &ResourceKind,
        identity: &ObjectIdentity,
    ) -> Result<ObservedObject, kube::Error> {
        let api = self.api_for(kind, Some(&identity.namespace));
        let body = api.get(&identity.name).await?;
        Ok(ObservedObject {
            identity: identity.clone(),
            body,
        })
    }
}

impl ApiGateway for KubeApiGateway {
    fn list(
        &self,
        kind: &ResourceKind,
    ) -> impl Future<Output = Result<Vec<ObjectIdentity>, kube::Error>> + Send {
        self.list(kind)
    }

    fn get(
        &self,
        kind: &ResourceKind,
        identity: &ObjectIdentity,
    ) -> impl Future<Output = Result<ObservedObject, kube::Error>> + Send {
        self.get(kind, identity)
    }
}

fn api_resource(kind: &ResourceKind) -> ApiResource {
    let gvk = GroupVersionKind::gvk(&kind.group, &kind.version, &kind.kind);
    ApiResource::from_gvk_with_plural(&gvk, &kind.plural)
}

fn identity_of(object: DynamicObject) -> ObjectIdentity {
    ObjectIdentity {
        namespace: object.metadata.namespace.unwrap_or_default(),
        name: object.metadata.name.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::{api_resource, identity_of};
    use kube::api::DynamicObject;
    use shared::resource::{ObjectIdentity, ResourceKind};

    fn sbom_kind() -> ResourceKind {
        ResourceKind::new(
            "spdx.softwarecomposition.kubescape.io",
            "v1beta1",
            "SBOMSummary",
            "sbomsummaries",
        )
    }

    #[test]
    fn builds_the_dynamic_api_descriptor() {
        let resource = api_resource(&sbom_kind());
        assert_eq!(resource.group, "spdx.softwarecomposition.kubescape.io");
        assert_eq!(resource.version, "v1beta1");
        assert_eq!(resource.kind, "SBOMSummary");
        assert_eq!(resource.plural, "sbomsummaries");
        assert_eq!(resource.api_version, "spdx.softwarecomposition.kubescape.io/v1beta1");
    }

    #[test]
    fn namespaced_object_identity() {
        let object = DynamicObject::new("scan-1", &api_resource(&sbom_kind())).within("kubescape");
        assert_eq!(identity_of(object), ObjectIdentity::namespaced("kubescape", "scan-1"));
    }

    #[test]
    fn cluster_scoped_object_identity() {
        let object = DynamicObject::new("scan-2", &api_resource(&sbom_kind()));
        let identity = identity_of(object);
        assert!(identity.is_cluster_scoped());
        assert_eq!(identity.name, "scan-2");
    }
}
