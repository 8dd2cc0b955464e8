//! Pure projection of catalog and cart state into serializable views.
//!
//! [`render`] holds no state and is idempotent for a given input; the
//! storefront calls it after every cart mutation and sends the result to
//! whatever front end is attached.

use serde::Serialize;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::models::CatalogItem;

/// Preset quantity choices offered on every product card.
pub const QUANTITY_OPTIONS: [u32; 4] = [1, 2, 4, 10];

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// The complete rendered storefront: product grid plus cart summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorefrontView {
    pub products: Vec<ProductCard>,
    pub cart: CartView,
}

/// One catalog entry with its quantity selector presets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub quantity_options: Vec<u32>,
}

/// The cart summary. `empty` drives the empty-state placeholder and
/// `checkout_enabled` is false exactly when the store has no entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: f64,
    pub empty: bool,
    pub checkout_enabled: bool,
}

/// One resolvable cart entry with its computed line total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub item_id: String,
    pub title: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

/// Project the catalog and cart into a [`StorefrontView`].
///
/// Cart entries whose id does not resolve in the catalog are skipped
/// silently; they stay in the store but produce no line and contribute
/// nothing to the total.
pub fn render(catalog: &Catalog, cart: &CartStore) -> StorefrontView {
    let products = catalog
        .items()
        .iter()
        .map(|item| ProductCard {
            item: item.clone(),
            quantity_options: QUANTITY_OPTIONS.to_vec(),
        })
        .collect();

    let lines: Vec<CartLine> = cart
        .entries()
        .filter_map(|(id, qty)| {
            catalog.get(id).map(|item| CartLine {
                item_id: item.id.clone(),
                title: item.title.clone(),
                unit_price: item.price,
                quantity: qty,
                line_total: item.price * f64::from(qty),
            })
        })
        .collect();

    // Empty-state is keyed off the raw store, not the resolvable lines: a
    // cart holding only dangling ids renders no lines but is not "empty".
    let empty = cart.is_empty();
    StorefrontView {
        products,
        cart: CartView {
            total: cart.total(catalog),
            checkout_enabled: !empty,
            empty,
            lines,
        },
    }
}
