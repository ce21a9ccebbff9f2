use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chefmate_core::{generate_meal_plan, GenerateRequest, GenerateResponse};
use utoipa::OpenApi;

/// Returns the router for POST /api/generate
pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate))
}

/// Generate a meal plan from a prompt
///
/// Forwards the prompt to the configured AI provider with a fixed system
/// instruction and sampling settings, and returns the trimmed text of the
/// first completion. Stateless: nothing is stored between calls.
///
/// When the provider answers without any text the script is
/// "No script generated". Provider failures are never masked this way.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated meal plan", body = GenerateResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 503, description = "AI service unavailable", body = ErrorResponse)
    )
)]
pub async fn generate(
    State(ai_client): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload?;

    let script = generate_meal_plan(ai_client.as_ref(), &request.prompt).await?;

    Ok(Json(GenerateResponse { script }))
}

#[derive(OpenApi)]
#[openapi(
    paths(generate),
    components(schemas(GenerateRequest, GenerateResponse))
)]
pub struct ApiDoc;
