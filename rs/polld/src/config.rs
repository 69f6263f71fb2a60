use std::time::Duration;

use shared::env::get_env_var_or;

use crate::constant::{
    DEFAULT_POLL_INTERVAL_SECONDS, DEFAULT_TARGET_GROUP, DEFAULT_TARGET_VERSION, POLL_INTERVAL_ENV,
    TARGET_GROUP_ENV, TARGET_VERSION_ENV,
};
use crate::error::PollDaemonError;

/// Runtime configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct PollConfig {
    pub group: String,
    pub version: String,
    /// Wait between successful cycles of each poller; zero means
    /// back-to-back cycles.
    pub poll_interval: Duration,
}

impl PollConfig {
    pub fn from_env() -> Result<Self, PollDaemonError> {
        let group = get_env_var_or(TARGET_GROUP_ENV, DEFAULT_TARGET_GROUP);
        let version = get_env_var_or(TARGET_VERSION_ENV, DEFAULT_TARGET_VERSION);
        let interval = get_env_var_or(POLL_INTERVAL_ENV, &DEFAULT_POLL_INTERVAL_SECONDS.to_string());
        let seconds = interval
            .parse::<u64>()
            .map_err(|source| PollDaemonError::InvalidPollInterval {
                value: interval,
                source,
            })?;
        Ok(Self {
            group,
            version,
            poll_interval: Duration::from_secs(seconds),
        })
    }
}
