use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

#[derive(Error, Debug)]
pub enum TracingSetupError {
    #[error("Subscriber error: {0}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),
}
