//! Vector index request types

use serde::{Deserialize, Serialize};

/// Request to insert-or-replace an entry in the index
///
/// The index computes the entry's embedding from `data` on its side;
/// no vector is supplied locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertRequest {
    /// Entry identifier; an upsert with an existing id replaces the entry
    id: String,
    /// Text the index embeds for similarity search
    data: String,
    /// Opaque metadata payload stored alongside the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
}

impl UpsertRequest {
    /// Create a new upsert request
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
            metadata: None,
        }
    }

    /// Set the metadata payload
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Get the entry id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the text to embed
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Get the metadata payload
    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }
}

/// Request for a similarity search against the index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Query text; the index embeds it before searching
    data: String,
    /// Maximum number of candidates to return
    top_k: usize,
    /// Whether to return each candidate's metadata payload
    include_metadata: bool,
}

impl QueryRequest {
    /// Create a new query request for the single best match
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            top_k: 1,
            include_metadata: false,
        }
    }

    /// Set the number of candidates to return
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Request metadata payloads with the candidates
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Get the query text
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Get the candidate limit
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Whether metadata payloads were requested
    pub fn include_metadata(&self) -> bool {
        self.include_metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_request() {
        let request = UpsertRequest::new("capital of france", "capital of france")
            .with_metadata(serde_json::json!({"value": "paris"}));

        assert_eq!(request.id(), "capital of france");
        assert_eq!(request.data(), "capital of france");
        assert_eq!(
            request.metadata(),
            Some(&serde_json::json!({"value": "paris"}))
        );
    }

    #[test]
    fn test_query_request_defaults() {
        let request = QueryRequest::new("france's capital");

        assert_eq!(request.data(), "france's capital");
        assert_eq!(request.top_k(), 1);
        assert!(!request.include_metadata());
    }

    #[test]
    fn test_query_request_builder() {
        let request = QueryRequest::new("query").with_top_k(5).with_metadata(true);

        assert_eq!(request.top_k(), 5);
        assert!(request.include_metadata());
    }
}
