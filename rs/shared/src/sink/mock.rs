use std::sync::{Arc, Mutex};

use crate::resource::{ObjectIdentity, ResourceKind};

use super::Sink;

/// Test sink collecting every record for later assertions.
#[derive(Clone)]
pub struct MockSink {
    received: Arc<Mutex<Vec<(ResourceKind, ObjectIdentity)>>>,
}

impl MockSink {
    pub fn new(received: Arc<Mutex<Vec<(ResourceKind, ObjectIdentity)>>>) -> Self {
        MockSink { received }
    }
}

impl Sink for MockSink {
    fn record(&self, kind: &ResourceKind, identity: &ObjectIdentity) {
        // received records are evaluated in the test
        let mut records = self.received.lock().unwrap();
        records.push((kind.clone(), identity.clone()));
    }
}
