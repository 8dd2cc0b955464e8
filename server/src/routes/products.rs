use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use marketplace_sdk::models::{CatalogItem, RecommendedItem};

use crate::state::AppState;

/// GET /api/products
///
/// The full catalog as a JSON array, in catalog order.
pub async fn list_products(State(state): State<Arc<AppState>>) -> Json<Vec<CatalogItem>> {
    Json(state.sdk.catalog().items().to_vec())
}

/// GET /api/recommended-courses
///
/// Catalog items whose theme appears among the content-gap themes, each
/// annotated with the fixed badge label.
pub async fn recommended_courses(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<RecommendedItem>> {
    Json(state.sdk.gaps().recommended(state.sdk.catalog()))
}
