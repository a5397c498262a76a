//! Session-scoped caching seam for the News API feed.
//!
//! The adapter itself is cache-agnostic and side-effect-free per call;
//! a caller that wants to avoid repeat API calls within one browsing
//! session injects a [`SessionCache`] and goes through [`get_or_fetch`].
//! Nothing here persists across the process lifetime.

use crate::models::NewsApiArticle;
use std::collections::HashMap;
use std::future::Future;
use tracing::debug;

/// Keyed store for one session's News API results.
pub trait SessionCache {
    fn get(&self, key: &str) -> Option<Vec<NewsApiArticle>>;
    fn set(&mut self, key: &str, value: Vec<NewsApiArticle>);
}

/// Plain in-memory cache, suitable for a single request-handling worker.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: HashMap<String, Vec<NewsApiArticle>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionCache for InMemoryCache {
    fn get(&self, key: &str) -> Option<Vec<NewsApiArticle>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Vec<NewsApiArticle>) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Return the cached feed for `key`, or run `fetch` once and cache it.
///
/// Caching an empty result is deliberate: a failed fetch stays failed for
/// the rest of the session rather than hammering the API on every page.
pub async fn get_or_fetch<C, F, Fut>(cache: &mut C, key: &str, fetch: F) -> Vec<NewsApiArticle>
where
    C: SessionCache,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Vec<NewsApiArticle>>,
{
    if let Some(hit) = cache.get(key) {
        debug!(%key, count = hit.len(), "Session cache hit");
        return hit;
    }

    let value = fetch().await;
    cache.set(key, value.clone());
    value
}
