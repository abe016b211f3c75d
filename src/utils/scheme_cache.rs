use moka::future::Cache;
use std::time::Duration;

use crate::model::advisory::Language;

/// Scheme-finder answers keyed by (normalized description, language).
/// The same business description asked again within the TTL is served locally.
#[derive(Clone)]
pub struct SchemeCache {
    inner: Cache<(String, Language), String>,
}

#[inline]
fn normalize(description: &str) -> String {
    description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl SchemeCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn get(&self, description: &str, language: Language) -> Option<String> {
        self.inner.get(&(normalize(description), language)).await
    }

    pub async fn insert(&self, description: &str, language: Language, answer: String) {
        self.inner
            .insert((normalize(description), language), answer)
            .await;
    }
}
