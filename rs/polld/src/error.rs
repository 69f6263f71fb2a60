#[derive(Debug, thiserror::Error)]
pub enum PollDaemonError {
    #[error("Kubernetes client error: {0}")]
    KubeError(#[from] kube::Error),
    #[error("Discovery of {group}/{version} failed: {source}")]
    DiscoveryError {
        group: String,
        version: String,
        source: kube::Error,
    },
    #[error("API server does not serve group {group}/{version}")]
    GroupNotServed { group: String, version: String },
    #[error("Invalid poll interval {value:?}: {source}")]
    InvalidPollInterval {
        value: String,
        source: std::num::ParseIntError,
    },
}
