pub const TARGET_GROUP_ENV: &str = "POLLD_TARGET_GROUP";
pub const TARGET_VERSION_ENV: &str = "POLLD_TARGET_VERSION";
pub const POLL_INTERVAL_ENV: &str = "POLLD_POLL_INTERVAL_SECONDS";

pub const DEFAULT_TARGET_GROUP: &str = "spdx.softwarecomposition.kubescape.io";
pub const DEFAULT_TARGET_VERSION: &str = "v1beta1";
pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 30;

pub const MIN_RETRY_BACKOFF_MILLIS: u64 = 800;
pub const MAX_RETRY_BACKOFF_SECONDS: u64 = 30;
