//! Semantic cache facade
//!
//! Translates key/value cache operations into calls against an external
//! vector-similarity index and applies a proximity-threshold policy to
//! decide hits vs misses. The facade holds no cache state of its own;
//! every operation is a remote round-trip, and collaborator errors
//! propagate to the caller unmodified.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::domain::cache::SemanticCacheConfig;
use crate::domain::index::{QueryRequest, UpsertRequest, VectorIndex};
use crate::domain::CacheError;
use crate::infrastructure::http::HttpClient;
use crate::infrastructure::index::UpstashVectorIndex;

/// Metadata field the cached value is stored under
const VALUE_FIELD: &str = "value";

/// Similarity-based key-value cache over an injected vector index
#[derive(Clone)]
pub struct SemanticCache {
    index: Arc<dyn VectorIndex>,
    config: SemanticCacheConfig,
}

impl std::fmt::Debug for SemanticCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticCache")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SemanticCache {
    /// Create a new cache with the default configuration
    pub fn new(index: Arc<dyn VectorIndex>) -> Self {
        Self::with_config(index, SemanticCacheConfig::default())
    }

    /// Create a new cache with custom configuration
    pub fn with_config(index: Arc<dyn VectorIndex>, config: SemanticCacheConfig) -> Self {
        Self { index, config }
    }

    /// Create a cache wired to an Upstash index described by `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        let index = UpstashVectorIndex::new(
            HttpClient::new(),
            &settings.index.url,
            &settings.index.token,
        );

        Self::with_config(Arc::new(index), settings.cache.clone())
    }

    /// Get the configuration
    pub fn config(&self) -> &SemanticCacheConfig {
        &self.config
    }

    /// Look up the cached value for a semantically similar key
    ///
    /// Returns `Ok(None)` on a clean miss; a miss is never an error.
    pub async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let request = QueryRequest::new(key).with_metadata(true);
        let matches = self
            .index
            .query(request, self.config.namespace.clone())
            .await?;

        let Some(best) = matches.into_iter().next() else {
            debug!(key, "cache miss: no candidates");
            return Ok(None);
        };

        if best.score <= self.config.min_proximity {
            debug!(key, score = best.score, "cache miss: below proximity threshold");
            return Ok(None);
        }

        match best.metadata_str(VALUE_FIELD) {
            Some(value) => {
                debug!(key, matched = %best.id, score = best.score, "cache hit");
                Ok(Some(value.to_string()))
            }
            None => {
                warn!(key, matched = %best.id, "candidate has no value payload");
                Ok(None)
            }
        }
    }

    /// Look up several keys at once
    ///
    /// Queries are independent and side-effect-free, so they run
    /// concurrently; results come back in input order.
    pub async fn get_many(&self, keys: &[String]) -> Result<Vec<Option<String>>, CacheError> {
        try_join_all(keys.iter().map(|key| self.get(key))).await
    }

    /// Store a value under a key, replacing any entry with the same key
    pub async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let request = UpsertRequest::new(key, key)
            .with_metadata(serde_json::json!({ VALUE_FIELD: value }));

        self.index
            .upsert(request, self.config.namespace.clone())
            .await?;

        debug!(key, "cache upsert");
        Ok(())
    }

    /// Store several key/value pairs
    ///
    /// Upserts run sequentially in input order; on a failure at pair `i`,
    /// pairs `0..i` have been stored and the error names the failing key
    /// via the collaborator's message.
    pub async fn set_many(&self, keys: &[String], values: &[String]) -> Result<(), CacheError> {
        if keys.len() != values.len() {
            return Err(CacheError::validation(format!(
                "keys and values must have equal length ({} != {})",
                keys.len(),
                values.len()
            )));
        }

        for (key, value) in keys.iter().zip(values.iter()) {
            self.set(key, value).await?;
        }

        Ok(())
    }

    /// Remove the entry stored under a key; returns 0 or 1
    pub async fn delete(&self, key: &str) -> Result<u64, CacheError> {
        self.index
            .delete(vec![key.to_string()], self.config.namespace.clone())
            .await
    }

    /// Remove the entries stored under the given keys; returns the count removed
    pub async fn delete_many(&self, keys: &[String]) -> Result<u64, CacheError> {
        self.index
            .delete(keys.to_vec(), self.config.namespace.clone())
            .await
    }

    /// Remove every entry in the cache's scope. Irreversible.
    pub async fn flush(&self) -> Result<(), CacheError> {
        self.index.reset(self.config.namespace.clone()).await
    }
}
