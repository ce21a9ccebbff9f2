//! AI client module for talking to an OpenAI-compatible chat-completion API.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI providers
//! - `OpenRouterClient`, built on async-openai, used in production
//! - `FakeAiClient` for tests
//! - Configuration via environment variables
//! - The meal-plan prompt and the generation call built on top of them
//!
//! # Configuration
//!
//! - `OPENROUTER_API_KEY` (required): API key for the provider
//! - `CHEFMATE_AI_MODEL` (optional): Model name
//! - `CHEFMATE_AI_BASE_URL` (optional): API base URL
//!
//! # Example
//!
//! ```ignore
//! use chefmate_core::ai::{generate_meal_plan, AiConfig, OpenRouterClient};
//!
//! let client = OpenRouterClient::new(AiConfig::from_env()?);
//! let script = generate_meal_plan(&client, "Create a meal plan using only the: Eggs (2 pcs) ...").await?;
//! println!("{}", script);
//! ```

mod client;
mod config;
mod fake;
mod meal_plan;
pub mod prompts;
mod types;

pub use client::{AiClient, AiError, OpenRouterClient};
pub use config::{AiConfig, ConfigError};
pub use fake::{FakeAiClient, FakeReply};
pub use meal_plan::{generate_meal_plan, meal_plan_request, NO_SCRIPT_FALLBACK};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};
