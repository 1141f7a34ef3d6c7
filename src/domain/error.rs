use thiserror::Error;

/// Core cache errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CacheError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = CacheError::validation("keys and values must have equal length");
        assert_eq!(
            error.to_string(),
            "Validation error: keys and values must have equal length"
        );
    }

    #[test]
    fn test_provider_error() {
        let error = CacheError::provider("upstash", "HTTP 401: unauthorized");
        assert_eq!(
            error.to_string(),
            "Provider error: upstash - HTTP 401: unauthorized"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = CacheError::configuration("index url is missing");
        assert_eq!(
            error.to_string(),
            "Configuration error: index url is missing"
        );
    }
}
