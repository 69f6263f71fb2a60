use kube::api::ApiResource;
use kube::{Client, Discovery};

use shared::resource::ResourceKind;

use crate::error::PollDaemonError;

/// Resolve the resource kinds currently registered under the target
/// group/version.
///
/// One-time startup step. A server that cannot answer discovery is
/// unusable for the whole run, so any failure here is fatal; there is no
/// retry. Kinds added or removed on the server later are not detected.
pub async fn resolve_kinds(
    client: &Client,
    group: &str,
    version: &str,
) -> Result<Vec<ResourceKind>, PollDaemonError> {
    let discovery = Discovery::new(client.clone())
        .filter(&[group])
        .run()
        .await
        .map_err(|source| PollDaemonError::DiscoveryError {
            group: group.to_owned(),
            version: version.to_owned(),
            source,
        })?;

    let api_group = discovery
        .groups()
        .find(|api_group| api_group.name() == group)
        .ok_or_else(|| PollDaemonError::GroupNotServed {
            group: group.to_owned(),
            version: version.to_owned(),
        })?;

    let resources = api_group.versioned_resources(version);
    Ok(kinds_from_resources(
        resources.into_iter().map(|(resource, _capabilities)| resource),
    ))
}

/// Map server-reported resources into kinds, preserving server order.
pub fn kinds_from_resources(resources: impl IntoIterator<Item = ApiResource>) -> Vec<ResourceKind> {
    resources
        .into_iter()
        .map(|resource| ResourceKind {
            group: resource.group,
            version: resource.version,
            kind: resource.kind,
            plural: resource.plural,
        })
        .collect()
}
