use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use marketplace_sdk::models::ContentGapReport;

use crate::state::AppState;

/// GET /api/content-gaps
///
/// The full content-gap report: post total, gap rows ordered by ascending
/// count, and the overall recommendation line.
pub async fn content_gaps(State(state): State<Arc<AppState>>) -> Json<ContentGapReport> {
    Json(state.sdk.gaps().report().clone())
}
