//! Immutable catalog of sellable items with id-based lookup.

use std::collections::HashMap;

use crate::error::{MarketplaceError, Result};
use crate::models::CatalogItem;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The fixed list of purchasable items, loaded once at SDK build time.
///
/// Preserves source order for display while keeping an id index for the
/// lookups the cart and gap services perform.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a list of items.
    ///
    /// Item ids must be unique; a duplicate id is rejected with
    /// [`MarketplaceError::InvalidArgument`].
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(MarketplaceError::InvalidArgument(format!(
                    "duplicate catalog id: {}",
                    item.id
                )));
            }
        }
        Ok(Self { items, index })
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Look up an item by id, failing with [`MarketplaceError::NotFound`]
    /// if the id does not resolve.
    pub fn require(&self, id: &str) -> Result<&CatalogItem> {
        self.get(id)
            .ok_or_else(|| MarketplaceError::NotFound(format!("catalog item: {id}")))
    }

    /// Whether an item with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
