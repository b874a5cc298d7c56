use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
///
/// Variants carry fully composed, user-facing messages; the layers below
/// (Raindrop client, artifact store, reads service) build those messages and
/// convert into this type at the handler boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("An API token is required to communicate with the Raindrop.io API.")]
    MissingApiToken,

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("{0}")]
    CollectionsFetch(String),

    #[error("{0}")]
    RaindropsFetch(String),

    #[error("No collection titled \"{0}\" was found")]
    CollectionNotFound(String),

    #[error("{0}")]
    Publish(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

/// Error response structure - a single message under the `error` key
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    ///
    /// The refresh trigger reports every pipeline failure as a 500; the
    /// caller only distinguishes success from failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingApiToken
            | Self::MissingCredential(_)
            | Self::CollectionsFetch(_)
            | Self::RaindropsFetch(_)
            | Self::CollectionNotFound(_)
            | Self::Publish(_)
            | Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the wire error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        let error_response = self.to_response();

        (status, Json(error_response)).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
