use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chefmate_core::AiError;
use thiserror::Error;

use crate::api::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("AI service error: {0}")]
    Upstream(#[from] AiError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedPayload(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MalformedPayload(..) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(..) => StatusCode::SERVICE_UNAVAILABLE,
        };

        if status.is_server_error() {
            tracing::warn!("AI call failed: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
