use serde::{Deserialize, Serialize};

use crate::infrastructure::raindrop::Raindrop;

/// One card on the "recently read" wall, exactly as the front-end consumes
/// it. Field names and order are part of the publish contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedRead {
    pub source: String,
    pub title: String,
    pub url: String,
}

impl From<&Raindrop> for TrackedRead {
    fn from(item: &Raindrop) -> Self {
        Self {
            source: resolve_source(item),
            title: item.title.clone(),
            url: item.link.clone(),
        }
    }
}

/// Display source for an item: the API's `domain` field when it carries a
/// value, else the hostname of the link, else the link as given.
fn resolve_source(item: &Raindrop) -> String {
    if let Some(domain) = item.domain.as_deref() {
        if !domain.is_empty() {
            return domain.to_string();
        }
    }

    reqwest::Url::parse(&item.link)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| item.link.clone())
}
