//! Layered configuration for docsmith.
//!
//! Precedence, lowest to highest: embedded defaults, `docsmith.toml` in the
//! working directory, an explicit `--config` file, and `DOCSMITH_`
//! environment variables with `__` as the nesting separator
//! (e.g. `DOCSMITH_AI__ANTHROPIC_API_KEY`, `DOCSMITH_SERVER__PORT`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ai::GeneratorConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    7420
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per documentation record
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    ".docsmith/records".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Provider selection: "anthropic" or "openai"
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model override; empty means the provider default
    #[serde(default)]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Base URL override, mainly for tests against a local stub
    #[serde(default)]
    pub base_url: Option<String>,
    /// Set via DOCSMITH_AI__ANTHROPIC_API_KEY
    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    /// Set via DOCSMITH_AI__OPENAI_API_KEY
    #[serde(default)]
    pub openai_api_key: Option<String>,
}

fn default_provider() -> String {
    "anthropic".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: String::new(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            base_url: None,
            anthropic_api_key: None,
            openai_api_key: None,
        }
    }
}

impl AiConfig {
    /// Assemble the explicit configuration handed to a generator constructor
    pub fn generator_config(&self, api_key: String, default_model: &str) -> GeneratorConfig {
        GeneratorConfig {
            api_key,
            model: if self.model.is_empty() {
                default_model.to_string()
            } else {
                self.model.clone()
            },
            max_tokens: self.max_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
            base_url: self.base_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub to_file: bool,
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_logs_dir() -> String {
    ".docsmith/logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: false,
            logs_dir: default_logs_dir(),
        }
    }
}

impl Config {
    /// Default config file location in the working directory
    pub fn local_config_path() -> PathBuf {
        PathBuf::from("docsmith.toml")
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so docsmith works without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        let local_config = Self::local_config_path();
        if local_config.exists() {
            builder = builder.add_source(config::File::from(local_config));
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables with DOCSMITH_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("DOCSMITH")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir)
    }

    pub fn logs_path(&self) -> PathBuf {
        PathBuf::from(&self.logging.logs_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 7420);
        assert_eq!(config.ai.provider, "anthropic");
        assert_eq!(config.ai.max_tokens, 1024);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.to_file);
        assert!(config.ai.anthropic_api_key.is_none());
    }

    #[test]
    fn test_generator_config_uses_provider_default_model() {
        let ai = AiConfig::default();
        let gen = ai.generator_config("key".to_string(), "claude-3-5-haiku-latest");
        assert_eq!(gen.model, "claude-3-5-haiku-latest");
        assert_eq!(gen.api_key, "key");
        assert_eq!(gen.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_generator_config_model_override() {
        let ai = AiConfig {
            model: "custom-model".to_string(),
            ..AiConfig::default()
        };
        let gen = ai.generator_config(String::new(), "fallback");
        assert_eq!(gen.model, "custom-model");
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.storage.data_dir, config.storage.data_dir);
    }
}
