//! Cart store: item-id to quantity mapping with an injected persistence port.
//!
//! Every mutating operation synchronously writes the full store state
//! through the port as one JSON blob of the form
//! `{ "<itemId>": <integerQuantity>, ... }`. A missing or malformed blob
//! restores to an empty store; it is never an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::catalog::Catalog;
use crate::error::Result;

// ---------------------------------------------------------------------------
// CartPersistence
// ---------------------------------------------------------------------------

/// Read/write capability for the serialized cart blob.
///
/// Injected into [`CartStore`] so cart logic can be exercised without any
/// particular storage backend (browser local storage in the original app,
/// a file on disk here, memory in tests).
pub trait CartPersistence: Send + Sync {
    /// Load the previously saved blob, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the saved blob with `blob`.
    fn save(&self, blob: &str) -> Result<()>;
}

/// File-backed persistence: one JSON file, parent directories created on
/// first save.
#[derive(Debug)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartPersistence for FileCartStore {
    fn load(&self) -> Result<Option<String>> {
        if self.path.exists() {
            Ok(Some(fs::read_to_string(&self.path)?))
        } else {
            Ok(None)
        }
    }

    fn save(&self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// In-memory persistence for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    blob: Mutex<Option<String>>,
}

impl MemoryCartStore {
    /// Start from an already-serialized blob, as if a prior session saved it.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }
}

impl CartPersistence for MemoryCartStore {
    fn load(&self) -> Result<Option<String>> {
        // A poisoned lock still holds the last written blob; recover it
        // rather than propagate the panic.
        Ok(self
            .blob
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn save(&self, blob: &str) -> Result<()> {
        *self.blob.lock().unwrap_or_else(|e| e.into_inner()) = Some(blob.to_string());
        Ok(())
    }
}

/// Forwarding impl so a port can be shared between a store and its owner
/// (session handoff, inspection in tests).
impl<T: CartPersistence + ?Sized> CartPersistence for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, blob: &str) -> Result<()> {
        (**self).save(blob)
    }
}

// ---------------------------------------------------------------------------
// CartStore
// ---------------------------------------------------------------------------

/// The per-session mapping of item id to desired quantity.
///
/// Entries are kept in id order, so iteration and the rendered cart view
/// are deterministic. Ids that no longer resolve in the catalog stay in the
/// store but are skipped by [`total`](CartStore::total) and by the renderer.
pub struct CartStore {
    entries: BTreeMap<String, u32>,
    persistence: Box<dyn CartPersistence>,
}

impl CartStore {
    /// Create a store over the given persistence port, restoring any
    /// previously saved state. Missing, unreadable, or malformed blobs all
    /// restore to an empty store.
    pub fn new(persistence: Box<dyn CartPersistence>) -> Self {
        let entries = persistence
            .load()
            .ok()
            .flatten()
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default();
        Self {
            entries,
            persistence,
        }
    }

    // -- Mutations ---------------------------------------------------------

    /// Add `qty` of an item, creating the entry if absent.
    ///
    /// A zero quantity is coerced to 1, matching the storefront control
    /// where an empty selector still adds a single unit. Quantities
    /// saturate at `u32::MAX` rather than overflow.
    pub fn add(&mut self, item_id: &str, qty: u32) -> Result<()> {
        let qty = qty.max(1);
        let entry = self.entries.entry(item_id.to_string()).or_insert(0);
        *entry = entry.saturating_add(qty);
        self.persist()
    }

    /// Overwrite the quantity for an item. Zero behaves exactly like
    /// [`remove`](CartStore::remove).
    pub fn set_quantity(&mut self, item_id: &str, qty: u32) -> Result<()> {
        if qty == 0 {
            return self.remove(item_id);
        }
        self.entries.insert(item_id.to_string(), qty);
        self.persist()
    }

    /// Delete an entry if present; no-op otherwise.
    pub fn remove(&mut self, item_id: &str) -> Result<()> {
        self.entries.remove(item_id);
        self.persist()
    }

    /// Empty the store.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()
    }

    // -- Reads -------------------------------------------------------------

    /// Stored quantity for an item, or `None` if not in the cart.
    pub fn quantity(&self, item_id: &str) -> Option<u32> {
        self.entries.get(item_id).copied()
    }

    /// All entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(id, &qty)| (id.as_str(), qty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Grand total: Σ price × quantity over entries whose id resolves in
    /// the catalog. Unresolved ids contribute 0.
    pub fn total(&self, catalog: &Catalog) -> f64 {
        self.entries
            .iter()
            .filter_map(|(id, &qty)| catalog.get(id).map(|item| item.price * f64::from(qty)))
            .sum()
    }

    /// Serialize the current entry map to the persisted wire form.
    pub fn snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    fn persist(&self) -> Result<()> {
        let blob = self.snapshot()?;
        self.persistence.save(&blob)
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
