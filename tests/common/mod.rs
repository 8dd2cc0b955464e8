//! Shared test fixtures for the marketplace SDK integration tests.
//!
//! Provides a small apple-stand catalog (for cart and render tests, where
//! prices matter more than themes) and a course catalog with a matching
//! gap table (for recommendation tests), plus a persistence port that
//! records every save.

#![allow(dead_code)]

use std::sync::Mutex;

use marketplace_sdk::cart::{CartPersistence, CartStore, MemoryCartStore};
use marketplace_sdk::error::Result;
use marketplace_sdk::models::{CatalogItem, ContentGap};
use marketplace_sdk::Catalog;

/// A produce catalog with exactly-representable prices, so totals can be
/// compared directly.
pub fn apple_catalog() -> Catalog {
    let items = vec![
        apple("honeycrisp", "Honeycrisp", 4.0),
        apple("gala", "Gala", 2.5),
        apple("fuji", "Fuji", 3.0),
        apple("granny-smith", "Granny Smith", 2.25),
    ];
    Catalog::from_items(items).unwrap()
}

fn apple(id: &str, title: &str, price: f64) -> CatalogItem {
    CatalogItem {
        unit: Some("per lb".to_string()),
        desc: Some(format!("{title} apples, sold by the pound.")),
        ..CatalogItem::new(id, title, price)
    }
}

/// A course catalog where some themes match [`sample_gaps`] and some do not.
pub fn course_catalog() -> Catalog {
    let items = vec![
        course("ai-101", "Intro to AI", 19.99, "ai_ml"),
        course("testing-mastery", "Test Automation Mastery", 29.99, "testing"),
        course("secure-code", "Secure Coding Essentials", 34.99, "security"),
        course("frontend-fundamentals", "Modern Frontend Fundamentals", 27.99, "frontend"),
        CatalogItem::new("untagged", "Untagged Workshop", 9.99),
    ];
    Catalog::from_items(items).unwrap()
}

fn course(id: &str, title: &str, price: f64, theme: &str) -> CatalogItem {
    CatalogItem {
        theme: Some(theme.to_string()),
        ..CatalogItem::new(id, title, price)
    }
}

/// Gap rows covering `testing` and `security` but not `ai_ml` or `frontend`.
pub fn sample_gaps() -> Vec<ContentGap> {
    vec![
        ContentGap {
            theme: "testing".to_string(),
            count: 1,
            percentage: 5.0,
            suggestion: "Write more about testing (1 posts found)".to_string(),
        },
        ContentGap {
            theme: "security".to_string(),
            count: 2,
            percentage: 10.0,
            suggestion: "Write more about security (2 posts found)".to_string(),
        },
    ]
}

/// A fresh cart store over in-memory persistence.
pub fn empty_cart() -> CartStore {
    CartStore::new(Box::new(MemoryCartStore::default()))
}

/// Persistence port that records every blob passed to `save`.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub saves: Mutex<Vec<String>>,
}

impl CartPersistence for RecordingStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.saves.lock().unwrap().last().cloned())
    }

    fn save(&self, blob: &str) -> Result<()> {
        self.saves.lock().unwrap().push(blob.to_string());
        Ok(())
    }
}

/// Assert two totals are equal within float tolerance.
pub fn assert_total(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected total {expected}, got {actual}"
    );
}
