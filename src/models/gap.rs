use serde::{Deserialize, Serialize};

use crate::models::CatalogItem;

// ---------------------------------------------------------------------------
// ContentGap — One underrepresented topic row
// ---------------------------------------------------------------------------

/// A topic with measured demand/coverage imbalance. Rows are static and
/// ordered by ascending `count` (scarcest coverage first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentGap {
    pub theme: String,
    pub count: u32,
    /// Share of total posts covering this theme, in [0, 100].
    pub percentage: f64,
    pub suggestion: String,
}

// ---------------------------------------------------------------------------
// ContentGapReport — Wire shape of GET /api/content-gaps
// ---------------------------------------------------------------------------

/// Full gap report. Field names are the wire format (snake_case), matching
/// what the front end consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentGapReport {
    pub total_blogs: u32,
    pub gaps: Vec<ContentGap>,
    pub recommendation: String,
}

// ---------------------------------------------------------------------------
// RecommendedItem — Catalog item annotated for GET /api/recommended-courses
// ---------------------------------------------------------------------------

/// A catalog item whose theme matches a content gap, carrying the fixed
/// badge label the storefront displays on recommended cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub badge: String,
}
