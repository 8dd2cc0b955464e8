//! Pluggable providers of catalog and content-gap data.
//!
//! The SDK loads all data once at build time through a [`DataSource`], so
//! swapping the demo tables for a real backend never touches the cart,
//! gap, or rendering logic.

use crate::config;
use crate::error::Result;
use crate::models::{CatalogItem, ContentGap};

// ---------------------------------------------------------------------------
// DataSource
// ---------------------------------------------------------------------------

/// Capability interface for loading storefront data at startup.
pub trait DataSource {
    /// All sellable items, in display order.
    fn list_items(&self) -> Result<Vec<CatalogItem>>;

    /// The content-gap rows, ordered by ascending count.
    fn list_gaps(&self) -> Result<Vec<ContentGap>>;

    /// Number of blog posts the gap analysis was derived from.
    fn total_blogs(&self) -> Result<u32>;

    /// The overall recommendation line for the gap report.
    fn recommendation(&self) -> Result<String>;
}

// ---------------------------------------------------------------------------
// StaticSource
// ---------------------------------------------------------------------------

/// The built-in demo source, backed by the static tables in [`config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

impl DataSource for StaticSource {
    fn list_items(&self) -> Result<Vec<CatalogItem>> {
        Ok(config::demo_items())
    }

    fn list_gaps(&self) -> Result<Vec<ContentGap>> {
        Ok(config::demo_gaps())
    }

    fn total_blogs(&self) -> Result<u32> {
        Ok(config::TOTAL_BLOGS)
    }

    fn recommendation(&self) -> Result<String> {
        Ok(config::GAP_RECOMMENDATION.to_string())
    }
}
