use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The artifact write failed; whatever was stored under the key before
    /// remains in place.
    #[error("Failed to publish artifact to {key}: {message}")]
    Upload { key: String, message: String },

    /// The store cannot be reached or the bucket is missing.
    #[error("Artifact store unavailable: {0}")]
    Unavailable(String),
}

/// Where published artifacts land.
///
/// Writes are whole-object: there is no append or partial update, and a
/// failed `put` leaves the previous object untouched.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Write `body` under `key` with the given content type, readable by
    /// anyone. One attempt per call; retrying a failed publish means
    /// re-running the whole pipeline.
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), PublishError>;

    /// Cheap reachability check for readiness reporting.
    async fn probe(&self) -> Result<(), PublishError>;
}
