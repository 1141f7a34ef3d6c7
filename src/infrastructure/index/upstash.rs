//! Upstash Vector index client
//!
//! REST client for an Upstash-style serverless vector index. The service
//! computes embeddings from raw text on its side, so every call here ships
//! text, never vectors.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::super::http::HttpClientTrait;
use crate::domain::index::{QueryMatch, QueryRequest, UpsertRequest, VectorIndex};
use crate::domain::CacheError;

const PROVIDER: &str = "upstash";

/// Upstash serverless vector index client
#[derive(Debug)]
pub struct UpstashVectorIndex<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
}

impl<C: HttpClientTrait> UpstashVectorIndex<C> {
    /// Create a new index client against a REST endpoint
    pub fn new(client: C, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let auth_header = format!("Bearer {}", token.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            auth_header,
            base_url,
        }
    }

    fn endpoint(&self, operation: &str, namespace: Option<&str>) -> String {
        match namespace {
            Some(ns) => format!("{}/{}/{}", self.base_url, operation, ns),
            None => format!("{}/{}", self.base_url, operation),
        }
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse<T: for<'de> Deserialize<'de>>(
        &self,
        json: serde_json::Value,
    ) -> Result<T, CacheError> {
        serde_json::from_value(json).map_err(|e| {
            CacheError::provider(PROVIDER, format!("Failed to parse response: {}", e))
        })
    }
}

#[async_trait]
impl<C: HttpClientTrait> VectorIndex for UpstashVectorIndex<C> {
    async fn query(
        &self,
        request: QueryRequest,
        namespace: Option<String>,
    ) -> Result<Vec<QueryMatch>, CacheError> {
        let url = self.endpoint("query-data", namespace.as_deref());
        let body = serde_json::to_value(QueryBody {
            data: request.data(),
            top_k: request.top_k(),
            include_metadata: request.include_metadata(),
            include_vectors: false,
        })
        .map_err(|e| CacheError::internal(format!("Failed to encode query: {}", e)))?;

        let response = self.client.post_json(&url, self.headers(), &body).await?;
        let parsed: QueryResponseBody = self.parse(response)?;

        Ok(parsed
            .result
            .into_iter()
            .map(|m| QueryMatch::new(m.id, m.score, m.metadata))
            .collect())
    }

    async fn upsert(
        &self,
        request: UpsertRequest,
        namespace: Option<String>,
    ) -> Result<(), CacheError> {
        let url = self.endpoint("upsert-data", namespace.as_deref());
        let body = serde_json::to_value(&request)
            .map_err(|e| CacheError::internal(format!("Failed to encode upsert: {}", e)))?;

        self.client.post_json(&url, self.headers(), &body).await?;

        Ok(())
    }

    async fn delete(
        &self,
        ids: Vec<String>,
        namespace: Option<String>,
    ) -> Result<u64, CacheError> {
        let url = self.endpoint("delete", namespace.as_deref());
        let body = serde_json::json!({ "ids": ids });

        let response = self.client.post_json(&url, self.headers(), &body).await?;
        let parsed: DeleteResponseBody = self.parse(response)?;

        Ok(parsed.result.deleted)
    }

    async fn reset(&self, namespace: Option<String>) -> Result<(), CacheError> {
        let url = self.endpoint("reset", namespace.as_deref());

        self.client
            .post_json(&url, self.headers(), &serde_json::json!({}))
            .await?;

        Ok(())
    }
}

// Upstash REST wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryBody<'a> {
    data: &'a str,
    top_k: usize,
    include_metadata: bool,
    include_vectors: bool,
}

#[derive(Debug, Deserialize)]
struct QueryResponseBody {
    result: Vec<QueryMatchBody>,
}

#[derive(Debug, Deserialize)]
struct QueryMatchBody {
    id: String,
    score: f32,
    #[serde(default)]
    metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct DeleteResponseBody {
    result: DeletedBody,
}

#[derive(Debug, Deserialize)]
struct DeletedBody {
    deleted: u64,
}
