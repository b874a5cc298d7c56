use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client as S3Client;
use std::sync::Arc;

use super::artifact_store::{ArtifactStore, PublishError};

/// S3 implementation of the artifact store.
///
/// Objects are written with a public-read ACL so the static front-end can
/// fetch them without any signing.
pub struct S3ArtifactStore {
    s3_client: Arc<S3Client>,
    bucket: String,
}

impl S3ArtifactStore {
    pub fn new(s3_client: Arc<S3Client>, bucket: impl Into<String>) -> Self {
        Self {
            s3_client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ArtifactStore for S3ArtifactStore {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), PublishError> {
        let size_bytes = body.len();

        self.s3_client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .acl(ObjectCannedAcl::PublicRead)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %DisplayErrorContext(&e),
                    bucket = %self.bucket,
                    key,
                    "S3 put_object failed"
                );
                PublishError::Upload {
                    key: key.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                }
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key,
            size_bytes,
            content_type,
            "Artifact published"
        );

        Ok(())
    }

    async fn probe(&self) -> Result<(), PublishError> {
        self.s3_client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| PublishError::Unavailable(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}
