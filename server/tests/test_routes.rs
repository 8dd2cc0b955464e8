//! Route-level tests driving the full router with tower's `oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use marketplace_api::routes;
use marketplace_api::state::AppState;
use marketplace_sdk::{config, MarketplaceSdk, MemoryCartStore};

fn test_app() -> axum::Router {
    let sdk = MarketplaceSdk::builder()
        .cart_persistence(Box::new(MemoryCartStore::default()))
        .build()
        .unwrap();
    routes::router(Arc::new(AppState::new(sdk)))
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// ---------------------------------------------------------------------------
// /api/products
// ---------------------------------------------------------------------------

#[tokio::test]
async fn products_returns_full_catalog_array() {
    let (status, body) = get_json("/api/products").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), config::demo_items().len());
    assert_eq!(items[0]["id"], "ai-101");
    assert_eq!(items[0]["title"], "Intro to AI");
    assert_eq!(items[0]["price"], 19.99);
}

// ---------------------------------------------------------------------------
// /api/content-gaps
// ---------------------------------------------------------------------------

#[tokio::test]
async fn content_gaps_returns_report_shape() {
    let (status, body) = get_json("/api/content-gaps").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_blogs"], u64::from(config::TOTAL_BLOGS));
    assert!(body["recommendation"].is_string());

    let gaps = body["gaps"].as_array().unwrap();
    assert_eq!(gaps.len(), config::demo_gaps().len());
    for gap in gaps {
        assert!(gap["theme"].is_string());
        assert!(gap["count"].is_u64());
        assert!(gap["percentage"].is_number());
        assert!(gap["suggestion"].is_string());
    }
}

#[tokio::test]
async fn content_gaps_are_ordered_by_ascending_count() {
    let (_, body) = get_json("/api/content-gaps").await;

    let counts: Vec<u64> = body["gaps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["count"].as_u64().unwrap())
        .collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
}

// ---------------------------------------------------------------------------
// /api/recommended-courses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn recommended_courses_match_gap_themes_exactly() {
    let (_, gaps_body) = get_json("/api/content-gaps").await;
    let gap_themes: Vec<&str> = gaps_body["gaps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["theme"].as_str().unwrap())
        .collect();

    let (status, body) = get_json("/api/recommended-courses").await;
    assert_eq!(status, StatusCode::OK);

    let recommended = body.as_array().unwrap();
    assert!(!recommended.is_empty());
    for course in recommended {
        assert!(gap_themes.contains(&course["theme"].as_str().unwrap()));
        assert_eq!(course["badge"], config::RECOMMENDED_BADGE);
    }

    // And no catalog item with a matching theme is left out.
    let expected = config::demo_items()
        .into_iter()
        .filter(|i| {
            i.theme
                .as_deref()
                .is_some_and(|t| gap_themes.contains(&t))
        })
        .count();
    assert_eq!(recommended.len(), expected);
}

// ---------------------------------------------------------------------------
// fallthrough
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = get_json("/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
