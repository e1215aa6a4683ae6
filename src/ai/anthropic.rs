//! Anthropic messages-API documentation generator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{documentation_prompt, DocGenerator, GeneratorConfig, ProviderError};

const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";
const PROVIDER_NAME: &str = "anthropic";

pub(crate) const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";

/// Documentation generator backed by the Anthropic messages API
pub struct AnthropicGenerator {
    config: GeneratorConfig,
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct MessageRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct MessageResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicGenerator {
    /// Create a new generator from explicit configuration
    pub fn new(config: GeneratorConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("docsmith/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::network(PROVIDER_NAME, e.to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| ANTHROPIC_API_BASE.to_string());

        Ok(Self {
            config,
            client,
            base_url,
        })
    }
}

#[async_trait]
impl DocGenerator for AnthropicGenerator {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    async fn generate(
        &self,
        source_code: &str,
        api_endpoint: &str,
    ) -> Result<String, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::not_configured(PROVIDER_NAME));
        }

        let url = format!("{}/v1/messages", self.base_url);
        let request_body = MessageRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user".to_string(),
                content: documentation_prompt(api_endpoint, source_code),
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ProviderError::network(PROVIDER_NAME, e.to_string()))?;

        let status = response.status();
        match status.as_u16() {
            200..=299 => {
                let body: MessageResponse = response
                    .json()
                    .await
                    .map_err(|e| ProviderError::network(PROVIDER_NAME, e.to_string()))?;

                body.content
                    .into_iter()
                    .find_map(|block| block.text)
                    .filter(|text| !text.trim().is_empty())
                    .ok_or_else(|| ProviderError::empty_completion(PROVIDER_NAME))
            }
            401 => Err(ProviderError::unauthorized(PROVIDER_NAME)),
            403 => Err(ProviderError::forbidden(PROVIDER_NAME)),
            429 => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse().ok());
                Err(ProviderError::rate_limited(PROVIDER_NAME, retry_after))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ProviderError::http(PROVIDER_NAME, status, body))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config(api_key: &str) -> GeneratorConfig {
        GeneratorConfig {
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 1024,
            timeout: Duration::from_secs(5),
            base_url: None,
        }
    }

    #[test]
    fn test_generator_name() {
        let generator = AnthropicGenerator::new(test_config("test-key")).unwrap();
        assert_eq!(generator.name(), "anthropic");
    }

    #[test]
    fn test_is_configured() {
        let generator = AnthropicGenerator::new(test_config("test-key")).unwrap();
        assert!(generator.is_configured());

        let generator = AnthropicGenerator::new(test_config("")).unwrap();
        assert!(!generator.is_configured());
    }

    #[tokio::test]
    async fn test_generate_without_key_fails_fast() {
        let generator = AnthropicGenerator::new(test_config("")).unwrap();
        let result = generator.generate("fn f() {}", "/cart").await;
        assert!(matches!(result, Err(ProviderError::NotConfigured { .. })));
    }

    #[test]
    fn test_base_url_override() {
        let mut config = test_config("key");
        config.base_url = Some("http://localhost:9999".to_string());
        let generator = AnthropicGenerator::new(config).unwrap();
        assert_eq!(generator.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_response_parsing_takes_first_text_block() {
        let json = r#"{"content":[{"type":"text","text":"Generated docs"}]}"#;
        let body: MessageResponse = serde_json::from_str(json).unwrap();
        let text = body.content.into_iter().find_map(|b| b.text);
        assert_eq!(text.as_deref(), Some("Generated docs"));
    }
}
