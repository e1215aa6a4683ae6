//! AI documentation generator trait and provider implementations.
//!
//! Supports Anthropic and OpenAI as text-generation backends. Providers are
//! constructed from an explicit [`GeneratorConfig`]; credentials never live
//! in ambient global state.

mod anthropic;
mod openai;

pub use anthropic::AnthropicGenerator;
pub use openai::OpenAiGenerator;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::AiConfig;

/// Errors from an AI provider call
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{provider}: unauthorized (401) - check API key")]
    Unauthorized { provider: String },

    #[error("{provider}: forbidden (403) - key lacks required permissions")]
    Forbidden { provider: String },

    #[error("{provider}: rate limited{}", .retry_after_secs.map(|s| format!(" - retry after {s}s")).unwrap_or_default())]
    RateLimited {
        provider: String,
        retry_after_secs: Option<u64>,
    },

    #[error("{provider}: network error - {message}")]
    Network { provider: String, message: String },

    #[error("{provider}: HTTP {status} - {message}")]
    Http {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("{provider}: completion contained no text")]
    EmptyCompletion { provider: String },

    #[error("{provider}: not configured (no API key)")]
    NotConfigured { provider: String },
}

impl ProviderError {
    pub fn unauthorized(provider: impl Into<String>) -> Self {
        ProviderError::Unauthorized {
            provider: provider.into(),
        }
    }

    pub fn forbidden(provider: impl Into<String>) -> Self {
        ProviderError::Forbidden {
            provider: provider.into(),
        }
    }

    pub fn rate_limited(provider: impl Into<String>, retry_after_secs: Option<u64>) -> Self {
        ProviderError::RateLimited {
            provider: provider.into(),
            retry_after_secs,
        }
    }

    pub fn network(provider: impl Into<String>, message: impl Into<String>) -> Self {
        ProviderError::Network {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn http(provider: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        ProviderError::Http {
            provider: provider.into(),
            status,
            message: message.into(),
        }
    }

    pub fn empty_completion(provider: impl Into<String>) -> Self {
        ProviderError::EmptyCompletion {
            provider: provider.into(),
        }
    }

    pub fn not_configured(provider: impl Into<String>) -> Self {
        ProviderError::NotConfigured {
            provider: provider.into(),
        }
    }
}

/// Configuration handed to a generator constructor
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    /// Override the provider base URL (used by tests)
    pub base_url: Option<String>,
}

/// Trait for AI documentation generators (Anthropic, OpenAI, test doubles)
#[async_trait]
pub trait DocGenerator: Send + Sync {
    /// Provider name (e.g., "anthropic", "openai")
    fn name(&self) -> &str;

    /// Check if the provider has an API key
    fn is_configured(&self) -> bool;

    /// Generate documentation text for the given source code and endpoint
    async fn generate(&self, source_code: &str, api_endpoint: &str)
        -> Result<String, ProviderError>;
}

/// Build the documentation prompt shared by all providers
pub(crate) fn documentation_prompt(api_endpoint: &str, source_code: &str) -> String {
    format!(
        "Generate clear, human-readable API documentation for the endpoint `{api_endpoint}`.\n\
         Describe its purpose, request and response shapes, and error cases based on the \
         implementation below. Respond with Markdown only.\n\n\
         Source code:\n```\n{source_code}\n```"
    )
}

/// Construct the generator selected by configuration
pub fn generator_from_config(ai: &AiConfig) -> Result<Arc<dyn DocGenerator>, ProviderError> {
    match ai.provider.as_str() {
        "openai" => Ok(Arc::new(OpenAiGenerator::new(ai.generator_config(
            ai.openai_api_key.clone().unwrap_or_default(),
            openai::DEFAULT_MODEL,
        ))?)),
        _ => Ok(Arc::new(AnthropicGenerator::new(ai.generator_config(
            ai.anthropic_api_key.clone().unwrap_or_default(),
            anthropic::DEFAULT_MODEL,
        ))?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::rate_limited("anthropic", Some(30));
        assert_eq!(err.to_string(), "anthropic: rate limited - retry after 30s");

        let err = ProviderError::rate_limited("anthropic", None);
        assert_eq!(err.to_string(), "anthropic: rate limited");

        let err = ProviderError::not_configured("openai");
        assert_eq!(err.to_string(), "openai: not configured (no API key)");
    }

    #[test]
    fn test_documentation_prompt_includes_inputs() {
        let prompt = documentation_prompt("/cart", "fn add_to_cart() {}");
        assert!(prompt.contains("`/cart`"));
        assert!(prompt.contains("fn add_to_cart() {}"));
    }

    #[test]
    fn test_generator_from_config_selects_provider() {
        let ai = AiConfig {
            provider: "openai".to_string(),
            ..AiConfig::default()
        };
        let generator = generator_from_config(&ai).unwrap();
        assert_eq!(generator.name(), "openai");

        let ai = AiConfig::default();
        let generator = generator_from_config(&ai).unwrap();
        assert_eq!(generator.name(), "anthropic");
    }
}
