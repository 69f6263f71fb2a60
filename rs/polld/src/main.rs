use kube::Client;
use shared::sink::LogSink;
use shared::tracing::setup_tracing;
use std::error::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use polld::config::PollConfig;
use polld::discovery::resolve_kinds;
use polld::kubeapi::KubeApiGateway;
use polld::poller::{run_poller, PollerOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing()?;

    let config = PollConfig::from_env()?;
    let client = Client::try_default().await?;

    let kinds = resolve_kinds(&client, &config.group, &config.version).await?;
    if kinds.is_empty() {
        warn!(
            "No resource kinds found under {}/{}, nothing to poll",
            config.group, config.version
        );
        return Ok(());
    }
    info!(
        "Polling {} resource kinds under {}/{}",
        kinds.len(),
        config.group,
        config.version
    );

    let shutdown = CancellationToken::new();
    let options = PollerOptions::with_interval(config.poll_interval);

    let mut pollers = Vec::new();
    for kind in kinds {
        let gateway = KubeApiGateway::new(client.clone());
        pollers.push(tokio::spawn(run_poller(
            gateway,
            LogSink,
            kind,
            options,
            shutdown.clone(),
        )));
    }

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received, stopping pollers");
            signal_token.cancel();
        }
    });

    for joined in futures::future::join_all(pollers).await {
        if let Err(e) = joined {
            error!("Poller task failed: {e}");
        }
    }
    info!("All pollers stopped");
    Ok(())
}
