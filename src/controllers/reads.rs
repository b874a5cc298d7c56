use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::{
    domain::reads::{ReadsService, ReadsServiceApi},
    error::AppResult,
};

pub struct ReadsController {
    reads_service: Arc<ReadsService>,
}

impl ReadsController {
    pub fn new(reads_service: Arc<ReadsService>) -> Self {
        Self { reads_service }
    }

    /// POST /api/reads/refresh - Rebuild and republish the latest-reads artifact
    ///
    /// Replaces the scheduled trigger of earlier deployments; the response
    /// body is the exact JSON that was just published.
    pub async fn refresh(State(controller): State<Arc<ReadsController>>) -> AppResult<Response> {
        let outcome = controller.reads_service.refresh().await?;

        tracing::info!(
            collection_id = outcome.collection_id,
            entry_count = outcome.entry_count,
            "Refresh complete"
        );

        Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            outcome.body,
        )
            .into_response())
    }
}
