use async_trait::async_trait;

use crate::domain::CacheError;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, CacheError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: std::time::Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, CacheError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| CacheError::provider("http", format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(CacheError::provider(
                "http",
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| CacheError::provider("http", format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
pub use mock::MockHttpClient;


#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_post_json_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/query-data"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_json(serde_json::json!({"data": "hello"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": []})),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let response = client
            .post_json(
                &format!("{}/query-data", server.uri()),
                vec![("Authorization", "Bearer test-token")],
                &serde_json::json!({"data": "hello"}),
            )
            .await
            .unwrap();

        assert_eq!(response, serde_json::json!({"result": []}));
    }

    #[tokio::test]
    async fn test_post_json_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/reset"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let result = client
            .post_json(
                &format!("{}/reset", server.uri()),
                vec![],
                &serde_json::json!({}),
            )
            .await;

        let error = result.unwrap_err();
        assert!(error.to_string().contains("401"));
        assert!(error.to_string().contains("unauthorized"));
    }

    #[tokio::test]
    async fn test_post_json_connection_error() {
        // Nothing listens on this port
        let client = HttpClient::new();
        let result = client
            .post_json(
                "http://127.0.0.1:1/query-data",
                vec![],
                &serde_json::json!({}),
            )
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CacheError::Provider { .. }
        ));
    }
}
