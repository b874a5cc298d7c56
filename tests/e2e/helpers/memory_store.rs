use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use tracked_reads_backend::infrastructure::storage::{ArtifactStore, PublishError};

/// One stored object.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// In-memory stand-in for the S3 store.
///
/// Keeps whole objects per key and can be armed to reject writes (leaving
/// existing objects untouched, matching the all-or-nothing behavior of the
/// real store) or to fail readiness probes.
#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, StoredObject>>,
    fail_puts: Mutex<bool>,
    fail_probes: Mutex<bool>,
    put_count: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().get(key).cloned()
    }

    pub fn body_string(&self, key: &str) -> Option<String> {
        self.object(key)
            .map(|object| String::from_utf8(object.body).expect("stored body is not utf-8"))
    }

    /// Pre-load an object, as if a previous run had published it.
    pub fn seed(&self, key: &str, body: &str, content_type: &str) {
        self.objects.lock().insert(
            key.to_string(),
            StoredObject {
                body: body.as_bytes().to_vec(),
                content_type: content_type.to_string(),
            },
        );
    }

    /// Make every following put fail.
    pub fn fail_puts(&self) {
        *self.fail_puts.lock() = true;
    }

    /// Make every following readiness probe fail.
    pub fn fail_probes(&self) {
        *self.fail_probes.lock() = true;
    }

    pub fn put_count(&self) -> usize {
        *self.put_count.lock()
    }
}

#[async_trait]
impl ArtifactStore for MemoryStore {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), PublishError> {
        if *self.fail_puts.lock() {
            return Err(PublishError::Upload {
                key: key.to_string(),
                message: "injected storage failure".to_string(),
            });
        }

        *self.put_count.lock() += 1;
        self.objects.lock().insert(
            key.to_string(),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn probe(&self) -> Result<(), PublishError> {
        if *self.fail_probes.lock() {
            return Err(PublishError::Unavailable(
                "injected storage outage".to_string(),
            ));
        }
        Ok(())
    }
}
