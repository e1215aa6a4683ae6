//! OpenAI chat-completions documentation generator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{documentation_prompt, DocGenerator, GeneratorConfig, ProviderError};

const OPENAI_API_BASE: &str = "https://api.openai.com";
const PROVIDER_NAME: &str = "openai";

pub(crate) const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Documentation generator backed by the OpenAI chat completions API
pub struct OpenAiGenerator {
    config: GeneratorConfig,
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct CompletionRequest {
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
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiGenerator {
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
            .unwrap_or_else(|| OPENAI_API_BASE.to_string());

        Ok(Self {
            config,
            client,
            base_url,
        })
    }
}

#[async_trait]
impl DocGenerator for OpenAiGenerator {
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

        let url = format!("{}/v1/chat/completions", self.base_url);
        let request_body = CompletionRequest {
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
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ProviderError::network(PROVIDER_NAME, e.to_string()))?;

        let status = response.status();
        match status.as_u16() {
            200..=299 => {
                let body: CompletionResponse = response
                    .json()
                    .await
                    .map_err(|e| ProviderError::network(PROVIDER_NAME, e.to_string()))?;

                body.choices
                    .into_iter()
                    .find_map(|choice| choice.message.content)
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
        let generator = OpenAiGenerator::new(test_config("test-key")).unwrap();
        assert_eq!(generator.name(), "openai");
    }

    #[tokio::test]
    async fn test_generate_without_key_fails_fast() {
        let generator = OpenAiGenerator::new(test_config("")).unwrap();
        let result = generator.generate("fn f() {}", "/cart").await;
        assert!(matches!(result, Err(ProviderError::NotConfigured { .. })));
    }

    #[test]
    fn test_response_parsing_takes_first_choice() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"Generated docs"}}]}"#;
        let body: CompletionResponse = serde_json::from_str(json).unwrap();
        let text = body.choices.into_iter().find_map(|c| c.message.content);
        assert_eq!(text.as_deref(), Some("Generated docs"));
    }
}
