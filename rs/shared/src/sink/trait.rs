use crate::resource::{ObjectIdentity, ResourceKind};

/// Receiver for observed objects.
///
/// `record` is fire-and-forget and must be safe to call from any number of
/// poller tasks at once.
pub trait Sink {
    fn record(&self, kind: &ResourceKind, identity: &ObjectIdentity);
}
