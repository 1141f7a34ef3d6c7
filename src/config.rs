use serde::Deserialize;

use crate::domain::cache::SemanticCacheConfig;

/// Crate configuration, loaded from the environment
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub index: IndexSettings,
    #[serde(default)]
    pub cache: SemanticCacheConfig,
}

/// Connection settings for the remote vector index
#[derive(Debug, Clone, Deserialize)]
pub struct IndexSettings {
    pub url: String,
    pub token: String,
}

impl Settings {
    /// Load settings from environment variables (with `.env` support)
    ///
    /// Variables use the `SEMANTIC_CACHE` prefix with `__` as the level
    /// separator, e.g. `SEMANTIC_CACHE__INDEX__URL`,
    /// `SEMANTIC_CACHE__INDEX__TOKEN`, `SEMANTIC_CACHE__CACHE__MIN_PROXIMITY`.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("SEMANTIC_CACHE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_settings_default_when_absent() {
        let settings: Settings = serde_json::from_str(
            r#"{"index": {"url": "https://example.upstash.io", "token": "secret"}}"#,
        )
        .unwrap();

        assert_eq!(settings.index.url, "https://example.upstash.io");
        assert_eq!(settings.index.token, "secret");
        assert!((settings.cache.min_proximity - 0.9).abs() < 0.01);
        assert!(settings.cache.namespace.is_none());
    }

    #[test]
    fn test_cache_settings_override() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "index": {"url": "https://example.upstash.io", "token": "secret"},
                "cache": {"min_proximity": 0.95, "namespace": "prompts"}
            }"#,
        )
        .unwrap();

        assert!((settings.cache.min_proximity - 0.95).abs() < 0.01);
        assert_eq!(settings.cache.namespace.as_deref(), Some("prompts"));
    }
}
