use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use shared::resource::ResourceKind;
use shared::sink::Sink;

use crate::backoff::PollBackoff;
use crate::constant::{
    DEFAULT_POLL_INTERVAL_SECONDS, MAX_RETRY_BACKOFF_SECONDS, MIN_RETRY_BACKOFF_MILLIS,
};
use crate::kubeapi::ApiGateway;

/// Timing knobs for one polling loop.
#[derive(Clone, Copy, Debug)]
pub struct PollerOptions {
    /// Wait between successful cycles; zero means back-to-back cycles.
    pub interval: Duration,
    /// First retry delay after a failed cycle.
    pub min_backoff: Duration,
    /// Retry delay cap.
    pub max_backoff: Duration,
}

impl PollerOptions {
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }
}

impl Default for PollerOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECONDS),
            min_backoff: Duration::from_millis(MIN_RETRY_BACKOFF_MILLIS),
            max_backoff: Duration::from_secs(MAX_RETRY_BACKOFF_SECONDS),
        }
    }
}

/// What one cycle saw.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Objects fetched in full and recorded.
    pub observed: usize,
    /// Objects that disappeared between list and get.
    pub skipped: usize,
}

/// Perpetual observation loop for exactly one resource kind.
///
/// A failed cycle is retried with exponential backoff and never affects
/// other kinds; the loop ends only through the shutdown token.
pub async fn run_poller<G, S>(
    gateway: G,
    sink: S,
    kind: ResourceKind,
    options: PollerOptions,
    shutdown: CancellationToken,
) where
    G: ApiGateway + Send + Sync,
    S: Sink + Send + Sync,
{
    let mut backoff = PollBackoff::new(options.min_backoff, options.max_backoff);
    info!("Starting poller for {kind}");

    loop {
        if shutdown.is_cancelled() {
            break;
        }
        let outcome = tokio::select! {
            () = shutdown.cancelled() => break,
            outcome = poll_cycle(&gateway, &sink, &kind) => outcome,
        };
        let wait = match outcome {
            Ok(outcome) => {
                debug!("{kind}: observed {}, skipped {}", outcome.observed, outcome.skipped);
                backoff.reset();
                options.interval
            }
            Err(error) => {
                let wait = backoff.next_delay();
                warn!("{kind}: poll cycle failed, retrying in {wait:?}: {error}");
                wait
            }
        };
        tokio::select! {
            () = shutdown.cancelled() => break,
            () = sleep(wait) => {}
        }
    }
    info!("Poller for {kind} stopped");
}

/// One pass over the kind: list all instances, then fetch each full body
/// in list order and hand it to the sink.
pub async fn poll_cycle<G, S>(
    gateway: &G,
    sink: &S,
    kind: &ResourceKind,
) -> Result<CycleOutcome, kube::Error>
where
    G: ApiGateway + Send + Sync,
    S: Sink + Send + Sync,
{
    let identities = gateway.list(kind).await?;
    let mut outcome = CycleOutcome::default();
    for identity in identities {
        match gateway.get(kind, &identity).await {
            Ok(_full) => {
                sink.record(kind, &identity);
                outcome.observed += 1;
            }
            // deleted between list and get
            Err(error) if is_not_found(&error) => {
                debug!("{kind}: {identity} disappeared before get, skipping");
                outcome.skipped += 1;
            }
            Err(error) => return Err(error),
        }
    }
    Ok(outcome)
}

fn is_not_found(error: &kube::Error) -> bool {
    matches!(error, kube::Error::Api(response) if response.code == 404)
}
