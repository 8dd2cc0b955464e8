//! Content-gap analysis: the static gap table and the derived
//! recommendation list.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::config;
use crate::models::{ContentGap, ContentGapReport, RecommendedItem};

// ---------------------------------------------------------------------------
// GapAnalysis
// ---------------------------------------------------------------------------

/// Stateless view over the content-gap table loaded at SDK build time.
///
/// The recommendation list is pure set-membership filtering: collect the
/// themes present in the gap table, then select catalog items whose theme
/// is in that set, in catalog order.
#[derive(Debug, Clone)]
pub struct GapAnalysis {
    report: ContentGapReport,
}

impl GapAnalysis {
    /// Build the analysis from loaded gap rows.
    pub fn new(gaps: Vec<ContentGap>, total_blogs: u32, recommendation: String) -> Self {
        Self {
            report: ContentGapReport {
                total_blogs,
                gaps,
                recommendation,
            },
        }
    }

    /// The full report, in the wire shape of `GET /api/content-gaps`.
    pub fn report(&self) -> &ContentGapReport {
        &self.report
    }

    /// The gap rows, ordered by ascending count.
    pub fn gaps(&self) -> &[ContentGap] {
        &self.report.gaps
    }

    /// Catalog items whose theme matches a gap theme, in catalog order,
    /// each annotated with the fixed badge label. Items without a theme
    /// never match.
    pub fn recommended(&self, catalog: &Catalog) -> Vec<RecommendedItem> {
        let themes: HashSet<&str> = self.report.gaps.iter().map(|g| g.theme.as_str()).collect();

        catalog
            .items()
            .iter()
            .filter(|item| {
                item.theme
                    .as_deref()
                    .is_some_and(|theme| themes.contains(theme))
            })
            .map(|item| RecommendedItem {
                item: item.clone(),
                badge: config::RECOMMENDED_BADGE.to_string(),
            })
            .collect()
    }
}
