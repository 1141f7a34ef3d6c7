//! Semantic key-value cache
//!
//! A thin facade over an externally hosted vector-similarity index:
//! lookups return a previously stored value whose key is semantically
//! close to the query, so paraphrased prompts can hit a cache of prior
//! results. Embedding generation, nearest-neighbor search and persistence
//! all happen inside the external service.
//!
//! - `SemanticCache` exposes get/set/delete/flush with a configurable
//!   proximity threshold (default 0.9) and optional namespace scoping
//! - `VectorIndex` models the external collaborator as a capability set,
//!   so implementations can be swapped
//! - `UpstashVectorIndex` talks to an Upstash-style REST endpoint over an
//!   injectable HTTP client
//! - `InMemoryVectorIndex` is a deterministic local fake for tests and
//!   development, using brute-force cosine similarity

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{IndexSettings, Settings};
pub use domain::cache::SemanticCacheConfig;
pub use domain::error::CacheError;
pub use domain::index::{QueryMatch, QueryRequest, UpsertRequest, VectorIndex};
pub use infrastructure::http::{HttpClient, HttpClientTrait};
pub use infrastructure::index::{InMemoryVectorIndex, UpstashVectorIndex};
pub use infrastructure::services::SemanticCache;
