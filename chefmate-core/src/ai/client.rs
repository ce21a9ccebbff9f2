//! AI client implementation using OpenRouter (OpenAI-compatible API).

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use super::config::AiConfig;
use super::types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};

#[derive(Error, Debug)]
pub enum AiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<OpenAIError> for AiError {
    fn from(e: OpenAIError) -> Self {
        match e {
            OpenAIError::Reqwest(e) => AiError::RequestFailed(e.to_string()),
            OpenAIError::ApiError(e) => AiError::Api(e.message),
            e @ OpenAIError::JSONDeserialize(..) => AiError::ParseError(e.to_string()),
            other => AiError::Api(other.to_string()),
        }
    }
}

/// Trait for AI clients.
///
/// Implementations must be stateless between calls and safe to share across
/// concurrent requests.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Complete a chat request.
    ///
    /// The `prompt_name` only labels the call in logs.
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError>;
}

/// AI client for OpenRouter or any other OpenAI-compatible endpoint.
///
/// Makes exactly one attempt per call: the library's retry-on-5xx/429
/// backoff is switched off. Timeouts are whatever the transport applies.
pub struct OpenRouterClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenRouterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AiConfig) -> Self {
        // Configure async-openai to use OpenRouter
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.api_key)
            .with_api_base(config.base_url.trim_end_matches('/'));

        let no_retry = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        let client = Client::with_config(openai_config).with_backoff(no_retry);

        Self {
            client,
            model: config.model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Convert our ChatMessage to async-openai's format.
    fn to_openai_message(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage, AiError> {
        match msg.role {
            Role::System => ChatCompletionRequestSystemMessageArgs::default()
                .content(msg.content.clone())
                .build()
                .map(Into::into)
                .map_err(|e| AiError::Api(format!("Failed to build system message: {}", e))),
            Role::User => ChatCompletionRequestUserMessageArgs::default()
                .content(msg.content.clone())
                .build()
                .map(Into::into)
                .map_err(|e| AiError::Api(format!("Failed to build user message: {}", e))),
        }
    }
}

#[async_trait]
impl AiClient for OpenRouterClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let messages: Vec<ChatCompletionRequestMessage> = request
            .messages
            .iter()
            .map(Self::to_openai_message)
            .collect::<Result<Vec<_>, _>>()?;

        let mut req_builder = CreateChatCompletionRequestArgs::default();
        req_builder.model(&self.model).messages(messages);

        if let Some(temperature) = request.temperature {
            req_builder.temperature(temperature);
        }
        if let Some(top_p) = request.top_p {
            req_builder.top_p(top_p);
        }
        if let Some(frequency_penalty) = request.frequency_penalty {
            req_builder.frequency_penalty(frequency_penalty);
        }
        if let Some(presence_penalty) = request.presence_penalty {
            req_builder.presence_penalty(presence_penalty);
        }
        if let Some(n) = request.n {
            req_builder.n(n);
        }

        let openai_request = req_builder
            .build()
            .map_err(|e| AiError::Api(e.to_string()))?;

        tracing::debug!(
            prompt_name = prompt_name,
            model = &self.model,
            "Calling AI API"
        );

        let response = self.client.chat().create(openai_request).await?;

        // Text of the first choice, if the provider sent any
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);

        let usage = response
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(ChatResponse { content, usage })
    }
}
