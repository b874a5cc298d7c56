use crate::error::AppError;
use crate::infrastructure::raindrop::RaindropApiError;
use crate::infrastructure::storage::PublishError;

#[derive(Debug, thiserror::Error)]
pub enum ReadsServiceError {
    #[error(transparent)]
    Api(#[from] RaindropApiError),
    #[error("No collection titled \"{0}\" was found")]
    CollectionNotFound(String),
    #[error(transparent)]
    Publish(#[from] PublishError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ReadsServiceError> for AppError {
    fn from(err: ReadsServiceError) -> Self {
        match err {
            ReadsServiceError::Api(RaindropApiError::MissingApiToken) => AppError::MissingApiToken,
            ReadsServiceError::Api(RaindropApiError::CollectionsFetch(message)) => {
                AppError::CollectionsFetch(message)
            }
            ReadsServiceError::Api(RaindropApiError::RaindropsFetch { message, .. }) => {
                AppError::RaindropsFetch(message)
            }
            ReadsServiceError::CollectionNotFound(title) => AppError::CollectionNotFound(title),
            ReadsServiceError::Publish(e) => AppError::Publish(e.to_string()),
            ReadsServiceError::Other(e) => AppError::Unknown(e.to_string()),
        }
    }
}
