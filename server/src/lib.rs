//! Marketplace REST API.
//!
//! Three read-only JSON endpoints over the marketplace SDK:
//!
//! - `GET /api/products` - full catalog as a JSON array
//! - `GET /api/content-gaps` - gap report with totals and recommendation
//! - `GET /api/recommended-courses` - catalog items matching a gap theme
//!
//! There are no write endpoints; unknown routes fall through to axum's
//! default 404.

pub mod routes;
pub mod state;
