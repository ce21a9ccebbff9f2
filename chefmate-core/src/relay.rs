//! Client side of the relay endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::types::{CatalogResponse, GenerateRequest, GenerateResponse};

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Relay request failed: {0}")]
    Request(String),

    #[error("Relay returned error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode relay response: {0}")]
    Decode(String),
}

/// Something that turns a generation request into a script.
#[async_trait]
pub trait MealPlanRelay: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, RelayError>;
}

/// Talks to a running server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpRelay {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Fetch the catalog the server offers.
    pub async fn fetch_catalog(&self) -> Result<Vec<String>, RelayError> {
        let response = self
            .client
            .get(self.url("/api/catalog"))
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let catalog: CatalogResponse = decode(response).await?;
        Ok(catalog.items)
    }
}

/// Read a JSON body, turning non-2xx statuses into [`RelayError::Status`].
async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RelayError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| RelayError::Request(e.to_string()))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        return Err(RelayError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| RelayError::Decode(e.to_string()))
}

#[async_trait]
impl MealPlanRelay for HttpRelay {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, RelayError> {
        let response = self
            .client
            .post(self.url("/api/generate"))
            .json(request)
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let generated: GenerateResponse = decode(response).await?;
        Ok(generated.script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let relay = HttpRelay::new("http://localhost:3000/");
        assert_eq!(
            relay.url("/api/generate"),
            "http://localhost:3000/api/generate"
        );
    }
}
