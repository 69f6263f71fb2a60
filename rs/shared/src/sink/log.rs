use tracing::info;

use crate::resource::{ObjectIdentity, ResourceKind};

use super::Sink;

/// Production sink: one log line per observation.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl Sink for LogSink {
    fn record(&self, kind: &ResourceKind, identity: &ObjectIdentity) {
        info!("{} {}", kind.plural, identity);
    }
}
