//! Wire types shared by the relay endpoint and its clients.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Successful response of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Raw model output, trimmed.
    pub script: String,
}

/// Response of `GET /api/catalog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogResponse {
    pub items: Vec<String>,
}
