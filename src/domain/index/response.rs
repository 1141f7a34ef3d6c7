//! Vector index response types

use serde::{Deserialize, Serialize};

/// A single candidate returned by a similarity search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryMatch {
    /// Identifier of the matched entry
    pub id: String,
    /// Normalized similarity score in [0, 1]; higher is more similar
    pub score: f32,
    /// Metadata payload stored with the entry, if requested
    pub metadata: Option<serde_json::Value>,
}

impl QueryMatch {
    /// Create a new query match
    pub fn new(id: impl Into<String>, score: f32, metadata: Option<serde_json::Value>) -> Self {
        Self {
            id: id.into(),
            score,
            metadata,
        }
    }

    /// Extract a string field from the metadata payload
    pub fn metadata_str(&self, field: &str) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(field))
            .and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_str() {
        let candidate = QueryMatch::new(
            "capital of france",
            0.97,
            Some(serde_json::json!({"value": "paris"})),
        );

        assert_eq!(candidate.metadata_str("value"), Some("paris"));
        assert_eq!(candidate.metadata_str("missing"), None);
    }

    #[test]
    fn test_metadata_str_without_metadata() {
        let candidate = QueryMatch::new("id", 0.5, None);

        assert_eq!(candidate.metadata_str("value"), None);
    }

    #[test]
    fn test_metadata_str_non_string_field() {
        let candidate = QueryMatch::new("id", 0.5, Some(serde_json::json!({"value": 42})));

        assert_eq!(candidate.metadata_str("value"), None);
    }
}
