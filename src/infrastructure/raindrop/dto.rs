use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Envelope shared by the Raindrop list endpoints: a `result` flag, the
/// items, and an optional reason when `result` is false.
///
/// `result` defaults to `false` so a body that does not carry the flag is
/// treated as an upstream failure instead of a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub result: bool,
    // The path form keeps the derived impl from demanding `T: Default`
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A collection as returned by `GET /collections`.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(default)]
    pub title: String,
}

/// A single bookmark ("raindrop") as returned by `GET /raindrops/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Raindrop {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: String,
    /// Site domain, e.g. "martinfowler.com". Imports from older bookmarking
    /// services do not always carry one.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}
