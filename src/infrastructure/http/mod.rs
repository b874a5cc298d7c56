use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, reads::ReadsController};
use crate::infrastructure::config::Config;
use crate::infrastructure::storage::ArtifactStore;

pub mod request_id;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Assemble the application router
///
/// Shared with the end-to-end tests so they exercise the same app the
/// binary serves.
pub fn build_router(
    store: Arc<dyn ArtifactStore>,
    reads_controller: Arc<ReadsController>,
) -> Router {
    // Refresh trigger (replaces the scheduled invocation of earlier deployments)
    let reads_routes = Router::new()
        .route("/api/reads/refresh", post(ReadsController::refresh))
        .with_state(reads_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(store)
        .merge(reads_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    store: Arc<dyn ArtifactStore>,
    reads_controller: Arc<ReadsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(store, reads_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
