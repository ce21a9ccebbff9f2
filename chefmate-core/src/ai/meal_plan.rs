//! The meal-plan generation call behind the relay endpoint.

use super::prompts::meal_plan::{MEAL_PLAN_PROMPT_NAME, MEAL_PLAN_SYSTEM_PROMPT};
use super::{AiClient, AiError, ChatMessage, ChatRequest};

/// Script returned when the provider answers without usable text.
pub const NO_SCRIPT_FALLBACK: &str = "No script generated";

/// Build the chat request for a user prompt: the fixed system instruction,
/// the prompt as the only user message, and fixed sampling settings.
pub fn meal_plan_request(prompt: &str) -> ChatRequest {
    ChatRequest {
        messages: vec![
            ChatMessage::system(MEAL_PLAN_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ],
        temperature: Some(0.7),
        top_p: Some(1.0),
        frequency_penalty: Some(0.0),
        presence_penalty: Some(0.0),
        n: Some(1),
    }
}

/// Ask the provider for a meal plan and return its trimmed text.
///
/// A successful call without text yields [`NO_SCRIPT_FALLBACK`]. Provider
/// failures are returned as errors and never replaced by the fallback.
pub async fn generate_meal_plan(ai_client: &dyn AiClient, prompt: &str) -> Result<String, AiError> {
    let response = ai_client
        .complete(MEAL_PLAN_PROMPT_NAME, meal_plan_request(prompt))
        .await?;

    let script = response
        .content
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_SCRIPT_FALLBACK)
        .to_string();

    tracing::debug!(
        prompt_tokens = response.usage.prompt_tokens,
        completion_tokens = response.usage.completion_tokens,
        fallback = script == NO_SCRIPT_FALLBACK,
        "Meal plan generated"
    );

    Ok(script)
}
