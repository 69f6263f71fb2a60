use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Failed to read environment variable {1}: {0}")]
    EnvVar(std::env::VarError, String),
}
