//! Vector index trait definition

use async_trait::async_trait;

use super::{QueryMatch, QueryRequest, UpsertRequest};
use crate::domain::CacheError;

#[cfg(test)]
use mockall::automock;

/// Capability set of an external vector-similarity index
///
/// Embedding generation, nearest-neighbor search and persistence all happen
/// behind this trait. Every operation accepts an optional namespace scoping
/// it to one logical partition of the index.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Similarity search; returns candidates ranked by descending score
    async fn query(
        &self,
        request: QueryRequest,
        namespace: Option<String>,
    ) -> Result<Vec<QueryMatch>, CacheError>;

    /// Insert-or-replace an entry keyed by its id
    async fn upsert(
        &self,
        request: UpsertRequest,
        namespace: Option<String>,
    ) -> Result<(), CacheError>;

    /// Remove entries by id; returns the number actually removed
    async fn delete(&self, ids: Vec<String>, namespace: Option<String>)
        -> Result<u64, CacheError>;

    /// Clear all entries in scope (one namespace, or the default scope)
    async fn reset(&self, namespace: Option<String>) -> Result<(), CacheError>;
}
