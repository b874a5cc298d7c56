pub mod artifact_store;
pub mod s3_artifact_store;

pub use artifact_store::{ArtifactStore, PublishError};
pub use s3_artifact_store::S3ArtifactStore;
