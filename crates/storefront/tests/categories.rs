//! Router tests for `GET /categories` against the in-memory store.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{
        Request, StatusCode,
        header::{CACHE_CONTROL, CONTENT_TYPE},
    },
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use shopfront_core::{CategoryId, SubCategoryId};
use shopfront_storefront::config::CatalogCacheConfig;
use shopfront_storefront::db::memory::{MemoryStore, SimulatedFailure};
use shopfront_storefront::models::{Category, SubCategory};
use shopfront_storefront::state::AppState;

fn category(id: i32, name: &str, slug: Option<&str>, display_order: i32, products: i64) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_owned(),
        slug: slug.map(str::to_owned),
        display_order,
        product_count: products,
        subcategories: Vec::new(),
    }
}

fn subcategory(id: i32, parent: i32, name: &str, display_order: i32, products: i64) -> SubCategory {
    SubCategory {
        id: SubCategoryId::new(id),
        category_id: CategoryId::new(parent),
        name: name.to_owned(),
        slug: None,
        display_order,
        product_count: products,
    }
}

async fn get_categories(store: &MemoryStore, cache: CatalogCacheConfig) -> Response {
    let app = shopfront_storefront::app(AppState::new(Arc::new(store.clone()), cache));
    app.oneshot(Request::get("/categories").body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_lighting_and_tools_end_to_end() {
    let store = MemoryStore::new();
    store.insert_category(category(1, "Lighting", None, 2, 1));
    store.insert_category(category(2, "Tools", Some("tools"), 1, 0));

    let response = get_categories(&store, CatalogCacheConfig::default()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(
        response.headers().get(CACHE_CONTROL).unwrap(),
        "public, s-maxage=60, stale-while-revalidate=300"
    );
    assert_eq!(
        body_json(response).await,
        json!([
            { "id": "tools", "name": "TOOLS", "count": 0, "subcategories": [] },
            { "id": "lighting", "name": "LIGHTING", "count": 1, "subcategories": [] }
        ])
    );
}

#[tokio::test]
async fn test_subcategory_products_not_counted_on_parent() {
    let store = MemoryStore::new();
    let mut outdoor = category(1, "Outdoor Living", None, 0, 0);
    outdoor.subcategories = vec![
        subcategory(2, 1, "Patio Heaters", 2, 1),
        subcategory(1, 1, "Garden Lights", 1, 5),
    ];
    store.insert_category(outdoor);

    let body = body_json(get_categories(&store, CatalogCacheConfig::default()).await).await;

    assert_eq!(body[0]["id"], "outdoor-living");
    assert_eq!(body[0]["name"], "OUTDOOR LIVING");
    assert_eq!(body[0]["count"], 0);
    assert_eq!(
        body[0]["subcategories"],
        json!([
            { "id": "garden-lights", "name": "Garden Lights", "count": 5 },
            { "id": "patio-heaters", "name": "Patio Heaters", "count": 1 }
        ])
    );
}

#[tokio::test]
async fn test_empty_catalog() {
    let store = MemoryStore::new();

    let response = get_categories(&store, CatalogCacheConfig::default()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_configured_cache_directives() {
    let store = MemoryStore::new();
    let cache = CatalogCacheConfig {
        max_age: 10,
        stale_while_revalidate: 20,
    };

    let response = get_categories(&store, cache).await;

    assert_eq!(
        response.headers().get(CACHE_CONTROL).unwrap(),
        "public, s-maxage=10, stale-while-revalidate=20"
    );
}

#[tokio::test]
async fn test_store_failure_is_500_without_cache_header() {
    let store = MemoryStore::new();
    store.insert_category(category(1, "Lighting", None, 0, 1));
    store.set_failure(Some(SimulatedFailure::Internal));

    let response = get_categories(&store, CatalogCacheConfig::default()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(CACHE_CONTROL).is_none());
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to fetch categories" })
    );
}

#[tokio::test]
async fn test_store_outage_is_503_without_cache_header() {
    let store = MemoryStore::new();
    store.set_failure(Some(SimulatedFailure::Unavailable));

    let response = get_categories(&store, CatalogCacheConfig::default()).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.headers().get(CACHE_CONTROL).is_none());
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to fetch categories" })
    );
}
