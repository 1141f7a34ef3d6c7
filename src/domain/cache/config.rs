//! Semantic cache configuration

use serde::{Deserialize, Serialize};

/// Configuration for the semantic cache facade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticCacheConfig {
    /// Minimum similarity score for a query to count as a cache hit
    /// (0.0 to 1.0). At 1.0 only exact lexical matches are returned; at
    /// 0.0 the closest stored entry always matches.
    #[serde(default = "default_min_proximity")]
    pub min_proximity: f32,

    /// Namespace scoping every operation of one facade instance
    #[serde(default)]
    pub namespace: Option<String>,
}

fn default_min_proximity() -> f32 {
    0.9
}

impl Default for SemanticCacheConfig {
    fn default() -> Self {
        Self {
            min_proximity: default_min_proximity(),
            namespace: None,
        }
    }
}

impl SemanticCacheConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the proximity threshold
    pub fn with_min_proximity(mut self, min_proximity: f32) -> Self {
        self.min_proximity = min_proximity.clamp(0.0, 1.0);
        self
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SemanticCacheConfig::default();

        assert!((config.min_proximity - 0.9).abs() < 0.01);
        assert!(config.namespace.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = SemanticCacheConfig::new()
            .with_min_proximity(0.95)
            .with_namespace("prompts");

        assert!((config.min_proximity - 0.95).abs() < 0.01);
        assert_eq!(config.namespace.as_deref(), Some("prompts"));
    }

    #[test]
    fn test_min_proximity_clamped() {
        let config = SemanticCacheConfig::new().with_min_proximity(1.5);
        assert!((config.min_proximity - 1.0).abs() < 0.01);

        let config = SemanticCacheConfig::new().with_min_proximity(-0.5);
        assert!(config.min_proximity.abs() < 0.01);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: SemanticCacheConfig = serde_json::from_str("{}").unwrap();

        assert!((config.min_proximity - 0.9).abs() < 0.01);
        assert!(config.namespace.is_none());
    }
}
