//! Marketplace SDK.
//!
//! Models a small storefront: an immutable catalog of sellable items, a
//! cart store persisted through an injected port, a content-gap table with
//! a derived recommendation list, and a pure renderer that projects the
//! current state into serializable views.
//!
//! # Quick start
//!
//! ```
//! use marketplace_sdk::{MarketplaceSdk, MemoryCartStore};
//!
//! let mut sdk = MarketplaceSdk::builder()
//!     .cart_persistence(Box::new(MemoryCartStore::default()))
//!     .build()
//!     .unwrap();
//!
//! sdk.cart_mut().add("ai-101", 1).unwrap();
//! let view = sdk.storefront();
//! assert!(view.cart.checkout_enabled);
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gaps;
pub mod models;
pub mod render;
pub mod source;

pub use cart::{CartPersistence, CartStore, FileCartStore, MemoryCartStore};
pub use catalog::Catalog;
pub use error::{MarketplaceError, Result};
pub use gaps::GapAnalysis;
pub use render::{render, StorefrontView};
pub use source::{DataSource, StaticSource};

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// MarketplaceSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`MarketplaceSdk`] instance.
///
/// Use [`MarketplaceSdk::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](MarketplaceSdkBuilder::build)
/// to create the SDK.
#[derive(Default)]
pub struct MarketplaceSdkBuilder {
    source: Option<Box<dyn DataSource>>,
    cart_path: Option<PathBuf>,
    cart_persistence: Option<Box<dyn CartPersistence>>,
}

impl MarketplaceSdkBuilder {
    /// Provide a custom data source for catalog and gap data.
    ///
    /// If not set, the built-in static demo tables are used.
    pub fn source(mut self, source: Box<dyn DataSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Persist the cart blob to a specific file path.
    ///
    /// Ignored when [`cart_persistence`](Self::cart_persistence) is set. If
    /// neither is set, the platform data directory is used
    /// (e.g. `~/.local/share/marketplace-sdk/cart.json` on Linux).
    pub fn cart_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cart_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Provide a custom persistence port for the cart blob.
    pub fn cart_persistence(mut self, persistence: Box<dyn CartPersistence>) -> Self {
        self.cart_persistence = Some(persistence);
        self
    }

    /// Build the SDK: load the catalog and gap table from the data source
    /// and restore any previously persisted cart.
    ///
    /// Catalog and gap data are loaded eagerly and never change for the
    /// lifetime of the instance.
    pub fn build(self) -> Result<MarketplaceSdk> {
        let source = self
            .source
            .unwrap_or_else(|| Box::new(StaticSource));

        let catalog = Catalog::from_items(source.list_items()?)?;
        let gaps = GapAnalysis::new(
            source.list_gaps()?,
            source.total_blogs()?,
            source.recommendation()?,
        );

        let persistence = self.cart_persistence.unwrap_or_else(|| {
            let path = self.cart_path.unwrap_or_else(config::default_cart_path);
            Box::new(FileCartStore::new(path))
        });
        let cart = CartStore::new(persistence);

        Ok(MarketplaceSdk {
            catalog,
            gaps,
            cart,
        })
    }
}

// ---------------------------------------------------------------------------
// MarketplaceSdk
// ---------------------------------------------------------------------------

/// The main entry point for the marketplace SDK.
///
/// Owns the immutable [`Catalog`] and [`GapAnalysis`] tables plus the
/// mutable [`CartStore`]. Created via [`MarketplaceSdk::builder()`].
pub struct MarketplaceSdk {
    catalog: Catalog,
    gaps: GapAnalysis,
    cart: CartStore,
}

impl MarketplaceSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> MarketplaceSdkBuilder {
        MarketplaceSdkBuilder::default()
    }

    /// The item catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The content-gap analysis.
    pub fn gaps(&self) -> &GapAnalysis {
        &self.gaps
    }

    /// Read access to the cart store.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable access to the cart store. Every mutation persists the full
    /// store state through the configured port before returning.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Render the current storefront view from the catalog and cart.
    pub fn storefront(&self) -> StorefrontView {
        render(&self.catalog, &self.cart)
    }
}

impl fmt::Display for MarketplaceSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MarketplaceSdk(items={}, gaps={}, cart_entries={})",
            self.catalog.len(),
            self.gaps.gaps().len(),
            self.cart.len()
        )
    }
}
