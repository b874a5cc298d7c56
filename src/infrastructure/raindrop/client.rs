use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{ApiEnvelope, Collection, Raindrop};
use super::error::RaindropApiError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.raindrop.io/rest/v1";

/// The published artifact only ever shows the most recent reads, so each
/// fetch asks for exactly this many items, newest first.
const ITEMS_PER_PAGE: u32 = 3;

/// Upper bound on any single API call; a stuck upstream surfaces as a fetch
/// error instead of hanging the invocation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only view of the Raindrop.io REST API.
#[async_trait]
pub trait RaindropApi: Send + Sync {
    /// Fetch every collection belonging to the authenticated user.
    async fn list_collections(&self) -> Result<Vec<Collection>, RaindropApiError>;

    /// Fetch the most recent raindrops in a collection, newest first.
    ///
    /// Special collection ids (0 = all, -1 = unsorted, -99 = trash) are
    /// passed through untouched; picking a meaningful id is the caller's
    /// business.
    async fn list_raindrops(&self, collection_id: i64) -> Result<Vec<Raindrop>, RaindropApiError>;
}

pub struct RaindropClient {
    http_client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl RaindropClient {
    /// Build a client bound to `base_url`. Fails with `MissingApiToken`
    /// before any request is made when the token is blank.
    pub fn new(api_token: &str, base_url: &str) -> Result<Self, RaindropApiError> {
        if api_token.trim().is_empty() {
            return Err(RaindropApiError::MissingApiToken);
        }

        Ok(Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
        })
    }
}

#[async_trait]
impl RaindropApi for RaindropClient {
    async fn list_collections(&self) -> Result<Vec<Collection>, RaindropApiError> {
        let url = format!("{}/collections", self.base_url);

        self.fetch_items(&url, "Failed to fetch collections", "fetching collections")
            .await
            .map_err(|message| {
                tracing::error!(error = %message, "Collections fetch failed");
                RaindropApiError::CollectionsFetch(message)
            })
    }

    async fn list_raindrops(&self, collection_id: i64) -> Result<Vec<Raindrop>, RaindropApiError> {
        let url = format!(
            "{}/raindrops/{}?sort=-created&perpage={}",
            self.base_url, collection_id, ITEMS_PER_PAGE
        );
        let failure_context =
            format!("Failed to fetch raindrops for collection ID {}", collection_id);
        let flag_context = format!("fetching raindrops for collection ID {}", collection_id);

        self.fetch_items(&url, &failure_context, &flag_context)
            .await
            .map_err(|message| {
                tracing::error!(error = %message, collection_id, "Raindrops fetch failed");
                RaindropApiError::RaindropsFetch {
                    collection_id,
                    message,
                }
            })
    }
}

impl RaindropClient {
    /// Perform one authenticated GET and unwrap the response envelope.
    ///
    /// Every way the call can go wrong funnels through the same message
    /// compositors, so both list operations fail with the same phrasing:
    /// `failure_context` opens transport and status messages ("Failed to
    /// fetch ..."), `flag_context` names the operation when the API itself
    /// reports `result: false` ("fetching ...").
    async fn fetch_items<T: DeserializeOwned>(
        &self,
        url: &str,
        failure_context: &str,
        flag_context: &str,
    ) -> Result<Vec<T>, String> {
        let response = self
            .http_client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| transport_failure(failure_context, &e))?;

        let status = response.status();
        if !status.is_success() {
            let server_message = response
                .json::<ApiEnvelope<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.error_message);
            return Err(status_failure(failure_context, status, server_message));
        }

        let envelope = response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| transport_failure(failure_context, &e))?;

        if !envelope.result {
            return Err(reported_failure(flag_context, envelope.error_message));
        }

        Ok(envelope.items)
    }
}

/// Message for a request that never produced a usable response.
fn transport_failure(context: &str, error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("{}. The request timed out.", context)
    } else if error.is_connect() {
        format!("{}. No response received from the server.", context)
    } else if error.is_decode() {
        format!("{}. Could not decode the server response: {}", context, error)
    } else if error.is_builder() {
        format!("{}. Error during request setup: {}", context, error)
    } else {
        format!("{}. An unexpected error occurred: {}", context, error)
    }
}

/// Message for a non-2xx response, quoting the server's own reason when the
/// body carried one.
fn status_failure(context: &str, status: StatusCode, server_message: Option<String>) -> String {
    match server_message.filter(|message| !message.is_empty()) {
        Some(message) => format!(
            "{}. Server responded with status {}: {}",
            context,
            status.as_u16(),
            message
        ),
        None => format!("{}. Server responded with status {}", context, status.as_u16()),
    }
}

/// Message for a 2xx response whose envelope flags failure. An absent or
/// blank reason is reported as "Unknown Reason".
fn reported_failure(flag_context: &str, reason: Option<String>) -> String {
    format!(
        "The Raindrop.io API indicated a failure in {}: {}",
        flag_context,
        reason
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "Unknown Reason".to_string())
    )
}
