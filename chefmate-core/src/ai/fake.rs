//! Fake AI client for testing.
//!
//! Returns canned replies based on prompt matching, so tests run without
//! network access or API costs.

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Role};

/// What the fake returns for a matching request.
#[derive(Debug, Clone, PartialEq)]
pub enum FakeReply {
    /// A successful completion with this text.
    Content(String),
    /// A successful completion without any content.
    Empty,
    /// A failed call with this message.
    Fail(String),
}

impl FakeReply {
    fn to_result(&self) -> Result<ChatResponse, AiError> {
        match self {
            FakeReply::Content(text) => Ok(ChatResponse {
                content: Some(text.clone()),
                ..Default::default()
            }),
            FakeReply::Empty => Ok(ChatResponse::default()),
            FakeReply::Fail(message) => Err(AiError::RequestFailed(message.clone())),
        }
    }
}

/// A fake AI client for testing.
///
/// Replies are matched by checking whether the user message contains a
/// registered substring (case-insensitive). Every request is recorded so
/// tests can inspect what would have been sent.
#[derive(Debug, Default)]
pub struct FakeAiClient {
    /// Prompt substring -> reply, checked in registration order
    replies: Vec<(String, FakeReply)>,
    /// Reply when no pattern matches
    default_reply: Option<FakeReply>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl FakeAiClient {
    /// Create a new FakeAiClient with no registered replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// A client that answers every request with `content`.
    pub fn always(content: &str) -> Self {
        Self::new().with_default_reply(FakeReply::Content(content.to_string()))
    }

    /// A client whose completions never carry any content.
    pub fn empty() -> Self {
        Self::new().with_default_reply(FakeReply::Empty)
    }

    /// A client whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self::new().with_default_reply(FakeReply::Fail(message.to_string()))
    }

    /// Create a client that returns `content` for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, content: &str) -> Self {
        let mut client = Self::new();
        client.add_reply(prompt_contains, FakeReply::Content(content.to_string()));
        client
    }

    /// Add a reply for prompts containing a specific substring.
    pub fn add_reply(&mut self, prompt_contains: &str, reply: FakeReply) {
        self.replies.push((prompt_contains.to_lowercase(), reply));
    }

    /// Set the reply used when no pattern matches.
    pub fn with_default_reply(mut self, reply: FakeReply) -> Self {
        self.default_reply = Some(reply);
        self
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        _prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let prompt_lower = request
            .messages
            .iter()
            .filter(|m| m.role == Role::User)
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        if let Some((_, reply)) = self
            .replies
            .iter()
            .find(|(pattern, _)| prompt_lower.contains(pattern))
        {
            return reply.to_result();
        }

        match &self.default_reply {
            Some(reply) => reply.to_result(),
            None => Err(AiError::RequestFailed(format!(
                "FakeAiClient: No reply configured for prompt (first 100 chars): {}",
                prompt_lower.chars().take(100).collect::<String>()
            ))),
        }
    }
}
