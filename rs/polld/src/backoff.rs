use std::time::Duration;

use backon::{BackoffBuilder, ExponentialBackoff, ExponentialBuilder};

/// Exponential backoff between failed poll cycles.
///
/// Delays grow from `min_delay` toward `max_delay` and re-arm to the
/// minimum after `reset`.
pub struct PollBackoff {
    builder: ExponentialBuilder,
    backoff: ExponentialBackoff,
    max_delay: Duration,
}

impl PollBackoff {
    pub fn new(min_delay: Duration, max_delay: Duration) -> Self {
        let builder = ExponentialBuilder::default()
            .with_min_delay(min_delay)
            .with_max_delay(max_delay)
            .with_factor(2.0)
            .without_max_times()
            .with_jitter();
        let backoff = builder.build();
        Self {
            builder,
            backoff,
            max_delay,
        }
    }

    /// Next wait before retrying a failed cycle.
    pub fn next_delay(&mut self) -> Duration {
        self.backoff.next().unwrap_or(self.max_delay)
    }

    /// Re-arm after a successful cycle.
    pub fn reset(&mut self) {
        self.backoff = self.builder.build();
    }
}
