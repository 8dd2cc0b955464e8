//! Static demo data tables and runtime defaults.
//!
//! The built-in catalog and content-gap tables back [`StaticSource`]
//! (crate::source::StaticSource). A real backend replaces them by providing
//! a custom [`DataSource`](crate::source::DataSource) to the SDK builder.

use std::path::PathBuf;

use crate::models::{CatalogItem, ContentGap};

/// Default HTTP port for the API server.
pub const DEFAULT_PORT: u16 = 4000;

/// Badge label attached to every recommended catalog item.
pub const RECOMMENDED_BADGE: &str = "High Demand";

/// Overall recommendation line in the content-gap report.
pub const GAP_RECOMMENDATION: &str =
    "Create courses for the underserved themes below to capture unmet demand.";

/// Number of blog posts the gap table was derived from.
pub const TOTAL_BLOGS: u32 = 47;

/// Resolve the API port from the `PORT` environment variable, falling back
/// to [`DEFAULT_PORT`].
pub fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Default location of the persisted cart blob
/// (e.g. `~/.local/share/marketplace-sdk/cart.json` on Linux).
pub fn default_cart_path() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("marketplace-sdk").join("cart.json")
    } else {
        PathBuf::from(".marketplace-sdk-cart.json")
    }
}

/// The demo course catalog.
pub fn demo_items() -> Vec<CatalogItem> {
    vec![
        item(
            "ai-101",
            "Intro to AI",
            19.99,
            "Foundations of modern AI for working developers.",
            "ai_ml",
            "beginner",
        ),
        item(
            "ml-projects",
            "Hands-on ML Projects",
            39.99,
            "Build and ship five end-to-end machine learning projects.",
            "ai_ml",
            "intermediate",
        ),
        item(
            "testing-mastery",
            "Test Automation Mastery",
            29.99,
            "Unit, integration, and property tests that pay for themselves.",
            "testing",
            "intermediate",
        ),
        item(
            "secure-code",
            "Secure Coding Essentials",
            34.99,
            "Find and fix the vulnerability classes reviewers miss.",
            "security",
            "intermediate",
        ),
        item(
            "docs-that-land",
            "Documentation That Developers Read",
            24.99,
            "Write reference docs and READMEs people actually use.",
            "documentation",
            "beginner",
        ),
        item(
            "devops-pipelines",
            "CI/CD Pipelines from Scratch",
            44.99,
            "Docker, deployment, and pipelines without the mystery.",
            "devops",
            "advanced",
        ),
        item(
            "frontend-fundamentals",
            "Modern Frontend Fundamentals",
            27.99,
            "Component-driven UI development from first principles.",
            "frontend",
            "beginner",
        ),
    ]
}

/// The demo content-gap table: themes under 10% coverage of [`TOTAL_BLOGS`],
/// ordered by ascending count.
pub fn demo_gaps() -> Vec<ContentGap> {
    vec![
        gap("documentation", 1, 2.1),
        gap("testing", 2, 4.3),
        gap("security", 3, 6.4),
        gap("devops", 4, 8.5),
    ]
}

fn item(
    id: &str,
    title: &str,
    price: f64,
    desc: &str,
    theme: &str,
    difficulty: &str,
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: title.to_string(),
        price,
        desc: Some(desc.to_string()),
        theme: Some(theme.to_string()),
        difficulty: Some(difficulty.to_string()),
        unit: None,
    }
}

fn gap(theme: &str, count: u32, percentage: f64) -> ContentGap {
    ContentGap {
        theme: theme.to_string(),
        count,
        percentage,
        suggestion: format!("Write more about {theme} ({count} posts found)"),
    }
}
