//! Server configuration from environment variables.

use chefmate_core::{AiConfig, ConfigError};
use std::env;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on, e.g. "0.0.0.0:3000".
    pub bind_addr: String,
    /// Provider settings handed to the AI client.
    pub ai: AiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `CHEFMATE_BIND_ADDR` (optional): listen address (default: [`DEFAULT_BIND_ADDR`])
    /// - provider variables as documented on [`AiConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("CHEFMATE_BIND_ADDR").unwrap_or_else(|_| {
            tracing::info!("CHEFMATE_BIND_ADDR not set, using default: {DEFAULT_BIND_ADDR}");
            DEFAULT_BIND_ADDR.to_string()
        });

        let ai = AiConfig::from_env()?;

        Ok(Self { bind_addr, ai })
    }
}
