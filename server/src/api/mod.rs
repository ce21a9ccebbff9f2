pub mod catalog;
pub mod generate;

use crate::AppState;
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Returns the router for every /api endpoint
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(generate::router())
        .merge(catalog::router())
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "chefmate", description = "Meal-plan generation relay"),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> =
        vec![generate::ApiDoc::openapi(), catalog::ApiDoc::openapi()];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
