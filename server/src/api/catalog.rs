use crate::AppState;
use axum::routing::get;
use axum::{Json, Router};
use chefmate_core::{CatalogResponse, CATALOG};
use utoipa::OpenApi;

/// Returns the router for GET /api/catalog
pub fn router() -> Router<AppState> {
    Router::new().route("/api/catalog", get(list_catalog))
}

/// List the selectable food items, in display order
#[utoipa::path(
    get,
    path = "/api/catalog",
    tag = "catalog",
    responses(
        (status = 200, description = "Catalog items", body = CatalogResponse)
    )
)]
pub async fn list_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        items: CATALOG.iter().map(|item| item.to_string()).collect(),
    })
}

#[derive(OpenApi)]
#[openapi(paths(list_catalog), components(schemas(CatalogResponse)))]
pub struct ApiDoc;
