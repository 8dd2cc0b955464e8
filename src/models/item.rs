use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CatalogItem — A sellable entry in the storefront catalog
// ---------------------------------------------------------------------------

/// One sellable item. Catalog rows are immutable after load; the optional
/// `theme` tag is what the content-gap service matches on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Pricing unit shown next to the price (e.g. "per lb" for produce).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl CatalogItem {
    /// Construct an item with only the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            desc: None,
            theme: None,
            difficulty: None,
            unit: None,
        }
    }
}
