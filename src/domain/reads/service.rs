use async_trait::async_trait;
use std::sync::Arc;

use super::error::ReadsServiceError;
use super::model::TrackedRead;
use crate::infrastructure::config::Config;
use crate::infrastructure::raindrop::RaindropApi;
use crate::infrastructure::storage::ArtifactStore;

const JSON_CONTENT_TYPE: &str = "application/json";
const LEGACY_JS_CONTENT_TYPE: &str = "text/javascript";

/// Publish-side settings for the refresh pipeline, lifted out of the full
/// configuration so the service only sees what it acts on.
#[derive(Debug, Clone)]
pub struct PublishTargets {
    /// Key of the JSON artifact.
    pub object_key: String,
    /// Key of the mirrored `const latest_json = ...;` script, for pages
    /// that still load the artifact through a script tag.
    pub legacy_js_key: Option<String>,
    /// When set to a positive id, the collections lookup is skipped and
    /// the id is trusted as-is.
    pub collection_id: Option<i64>,
    /// Collection title to match when no usable id is configured.
    pub collection_title: String,
    /// Publish oldest-first instead of the API's newest-first order.
    pub reverse_order: bool,
}

impl PublishTargets {
    pub fn from_config(config: &Config) -> Self {
        Self {
            object_key: config.object_key.clone(),
            legacy_js_key: config.legacy_js_key.clone(),
            collection_id: config.collection_id,
            collection_title: config.collection_title.clone(),
            reverse_order: config.reverse_order,
        }
    }
}

/// Outcome of a successful refresh, echoed back to the trigger caller.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub collection_id: i64,
    pub entry_count: usize,
    /// The exact JSON body that was published.
    pub body: String,
}

pub struct ReadsService {
    raindrop: Arc<dyn RaindropApi>,
    store: Arc<dyn ArtifactStore>,
    targets: PublishTargets,
}

impl ReadsService {
    pub fn new(
        raindrop: Arc<dyn RaindropApi>,
        store: Arc<dyn ArtifactStore>,
        targets: PublishTargets,
    ) -> Self {
        Self {
            raindrop,
            store,
            targets,
        }
    }
}

#[async_trait]
pub trait ReadsServiceApi: Send + Sync {
    /// Run one full pipeline pass: resolve the target collection, fetch its
    /// latest items, normalize them and overwrite the published artifact.
    ///
    /// Steps run strictly in sequence and the first failure aborts the
    /// pass, leaving the previously published artifact in place.
    async fn refresh(&self) -> Result<RefreshOutcome, ReadsServiceError>;
}

#[async_trait]
impl ReadsServiceApi for ReadsService {
    async fn refresh(&self) -> Result<RefreshOutcome, ReadsServiceError> {
        let collection_id = self.resolve_collection_id().await?;

        let items = self.raindrop.list_raindrops(collection_id).await?;
        if let Some(newest) = items.first().and_then(|item| item.created) {
            tracing::debug!(collection_id, newest_created = %newest, "Fetched latest raindrops");
        }

        let mut entries: Vec<TrackedRead> = items.iter().map(TrackedRead::from).collect();
        if self.targets.reverse_order {
            entries.reverse();
        }

        let body = serde_json::to_string(&entries)
            .map_err(|e| anyhow::anyhow!("failed to serialize artifact: {}", e))?;

        self.store
            .put(
                &self.targets.object_key,
                body.clone().into_bytes(),
                JSON_CONTENT_TYPE,
            )
            .await?;

        if let Some(js_key) = &self.targets.legacy_js_key {
            let script = format!("const latest_json = {};", body);
            self.store
                .put(js_key, script.into_bytes(), LEGACY_JS_CONTENT_TYPE)
                .await?;
        }

        tracing::info!(
            collection_id,
            entry_count = entries.len(),
            key = %self.targets.object_key,
            "Published latest reads"
        );

        Ok(RefreshOutcome {
            collection_id,
            entry_count: entries.len(),
            body,
        })
    }
}

impl ReadsService {
    /// A configured positive id wins outright and skips the collections
    /// round trip. Anything else falls back to matching the configured
    /// title against the user's collections, first match by position.
    async fn resolve_collection_id(&self) -> Result<i64, ReadsServiceError> {
        if let Some(id) = self.targets.collection_id {
            if id > 0 {
                tracing::debug!(collection_id = id, "Using configured collection id");
                return Ok(id);
            }
        }

        let collections = self.raindrop.list_collections().await?;

        collections
            .iter()
            .find(|collection| collection.title == self.targets.collection_title)
            .map(|collection| collection.id)
            .ok_or_else(|| {
                ReadsServiceError::CollectionNotFound(self.targets.collection_title.clone())
            })
    }
}
