//! In-memory vector index implementation
//!
//! Brute-force cosine scan over a namespace -> id map, with a deterministic
//! hashed bag-of-words embedding standing in for the remote embedding model.
//! Suitable for tests and local development; the similarity it produces is
//! lexical overlap, not semantics.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::index::{QueryMatch, QueryRequest, UpsertRequest, VectorIndex};
use crate::domain::CacheError;

const DEFAULT_DIMENSIONS: usize = 384;

/// Key under which un-namespaced entries are stored
const DEFAULT_SCOPE: &str = "";

#[derive(Debug, Clone)]
struct StoredEntry {
    embedding: Vec<f32>,
    metadata: Option<serde_json::Value>,
}

/// In-memory vector index using linear search
#[derive(Debug)]
pub struct InMemoryVectorIndex {
    namespaces: RwLock<HashMap<String, HashMap<String, StoredEntry>>>,
    dimensions: usize,
}

impl InMemoryVectorIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_DIMENSIONS)
    }

    /// Create a new empty index with custom embedding dimensions
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            namespaces: RwLock::new(HashMap::new()),
            dimensions,
        }
    }

    /// Deterministic bag-of-words embedding: every lowercased whitespace
    /// token hashes into one bucket, then the vector is L2-normalized.
    /// Texts with the same word multiset embed identically.
    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        for token in text.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            token.to_lowercase().hash(&mut hasher);
            let bucket = (hasher.finish() % self.dimensions as u64) as usize;
            vector[bucket] += 1.0;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }

    fn scope(namespace: Option<String>) -> String {
        namespace.unwrap_or_else(|| DEFAULT_SCOPE.to_string())
    }
}

impl Default for InMemoryVectorIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorIndex for InMemoryVectorIndex {
    async fn query(
        &self,
        request: QueryRequest,
        namespace: Option<String>,
    ) -> Result<Vec<QueryMatch>, CacheError> {
        let query_embedding = self.embed(request.data());

        let namespaces = self
            .namespaces
            .read()
            .map_err(|e| CacheError::internal(format!("Failed to acquire read lock: {}", e)))?;

        let mut results: Vec<QueryMatch> = namespaces
            .get(&Self::scope(namespace))
            .into_iter()
            .flat_map(|entries| entries.iter())
            .map(|(id, entry)| {
                let score = cosine_similarity(&query_embedding, &entry.embedding);
                let metadata = if request.include_metadata() {
                    entry.metadata.clone()
                } else {
                    None
                };

                QueryMatch::new(id.clone(), score, metadata)
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(request.top_k());

        Ok(results)
    }

    async fn upsert(
        &self,
        request: UpsertRequest,
        namespace: Option<String>,
    ) -> Result<(), CacheError> {
        let entry = StoredEntry {
            embedding: self.embed(request.data()),
            metadata: request.metadata().cloned(),
        };

        let mut namespaces = self
            .namespaces
            .write()
            .map_err(|e| CacheError::internal(format!("Failed to acquire write lock: {}", e)))?;

        namespaces
            .entry(Self::scope(namespace))
            .or_default()
            .insert(request.id().to_string(), entry);

        Ok(())
    }

    async fn delete(
        &self,
        ids: Vec<String>,
        namespace: Option<String>,
    ) -> Result<u64, CacheError> {
        let mut namespaces = self
            .namespaces
            .write()
            .map_err(|e| CacheError::internal(format!("Failed to acquire write lock: {}", e)))?;

        let Some(entries) = namespaces.get_mut(&Self::scope(namespace)) else {
            return Ok(0);
        };

        let mut deleted = 0;
        for id in &ids {
            if entries.remove(id).is_some() {
                deleted += 1;
            }
        }

        Ok(deleted)
    }

    async fn reset(&self, namespace: Option<String>) -> Result<(), CacheError> {
        let mut namespaces = self
            .namespaces
            .write()
            .map_err(|e| CacheError::internal(format!("Failed to acquire write lock: {}", e)))?;

        namespaces.remove(&Self::scope(namespace));

        Ok(())
    }
}

/// Calculate cosine similarity between two vectors
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
