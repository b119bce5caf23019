//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET   /health                - Liveness check
//! GET   /health/ready          - Readiness check (store reachable)
//!
//! # Catalog
//! GET   /categories            - Category tree with product counts (shared-cacheable)
//!
//! # Admin
//! GET   /admin/orders/{id}     - Single order
//! PATCH /admin/orders/{id}     - Overwrite order status, body: {"status": "..."}
//! ```

pub mod categories;
pub mod health;
pub mod orders;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new().route(
        "/orders/{id}",
        get(orders::show).patch(orders::update_status),
    )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/categories", get(categories::index))
        .nest("/admin", admin_routes())
}
