#[derive(Debug, thiserror::Error)]
pub enum RaindropApiError {
    #[error("An API token is required to communicate with the Raindrop.io API.")]
    MissingApiToken,

    /// `GET /collections` failed; the message carries the composed detail.
    #[error("{0}")]
    CollectionsFetch(String),

    /// `GET /raindrops/{collection_id}` failed.
    #[error("{message}")]
    RaindropsFetch { collection_id: i64, message: String },
}
