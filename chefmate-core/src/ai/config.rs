//! AI configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default OpenRouter base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1-distill-llama-70b:free";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Model name (e.g., "deepseek/deepseek-r1-distill-llama-70b:free").
    pub model: String,
    /// Base URL for the API, without the `/chat/completions` suffix.
    pub base_url: String,
}

impl AiConfig {
    /// Configuration with the default model and base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENROUTER_API_KEY`: API key for OpenRouter
    ///
    /// Optional:
    /// - `CHEFMATE_AI_MODEL`: Model name (default: [`DEFAULT_MODEL`])
    /// - `CHEFMATE_AI_BASE_URL`: API base URL (default: [`DEFAULT_BASE_URL`])
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let model = env::var("CHEFMATE_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            env::var("CHEFMATE_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }
}
