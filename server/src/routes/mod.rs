pub mod gaps;
pub mod products;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the API router over the shared state.
///
/// Kept separate from `main` so tests can drive the full service with
/// `tower::ServiceExt::oneshot`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/products", get(products::list_products))
        .route(
            "/api/recommended-courses",
            get(products::recommended_courses),
        )
        .route("/api/content-gaps", get(gaps::content_gaps))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
