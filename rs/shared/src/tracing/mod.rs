mod error;
mod tracing;

pub use self::error::TracingSetupError;
pub use self::tracing::setup_tracing;
