//! Integration tests for Shopfront.
//!
//! These tests talk to a running storefront over HTTP and seed its database
//! directly.
//!
//! # Running Tests
//!
//! ```bash
//! # Migrate the test database and start the server
//! cargo run -p shopfront-cli -- migrate
//! cargo run -p shopfront-storefront
//!
//! # Run the ignored integration tests
//! cargo test -p shopfront-integration-tests -- --ignored --test-threads=1
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_BASE_URL` - Server under test (default: `http://localhost:3000`)
//! - `SHOPFRONT_DATABASE_URL` - Database the server is using

use reqwest::Client;
use sqlx::PgPool;

/// Base URL for the storefront API.
#[must_use]
pub fn base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Shared handles for a test run.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub pool: PgPool,
}

impl TestContext {
    /// Connect to the database and build an HTTP client.
    ///
    /// # Panics
    ///
    /// Panics if `SHOPFRONT_DATABASE_URL` is unset or the database is unreachable.
    pub async fn new() -> Self {
        let database_url = std::env::var("SHOPFRONT_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .expect("SHOPFRONT_DATABASE_URL must be set for integration tests");
        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        Self {
            client: Client::new(),
            base_url: base_url(),
            pool,
        }
    }

    /// Absolute URL for a path on the server under test.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Remove every catalog row.
    ///
    /// # Panics
    ///
    /// Panics if the delete fails.
    pub async fn clear_catalog(&self) {
        sqlx::query("TRUNCATE catalog.product, catalog.subcategory, catalog.category RESTART IDENTITY CASCADE")
            .execute(&self.pool)
            .await
            .expect("Failed to clear catalog");
    }

    /// Insert a category and return its id.
    ///
    /// # Panics
    ///
    /// Panics if the insert fails.
    pub async fn insert_category(&self, name: &str, slug: Option<&str>, display_order: i32) -> i32 {
        sqlx::query_scalar(
            "INSERT INTO catalog.category (name, slug, display_order) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(slug)
        .bind(display_order)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert category")
    }

    /// Insert a subcategory and return its id.
    ///
    /// # Panics
    ///
    /// Panics if the insert fails.
    pub async fn insert_subcategory(&self, category_id: i32, name: &str, display_order: i32) -> i32 {
        sqlx::query_scalar(
            "INSERT INTO catalog.subcategory (category_id, name, display_order) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(category_id)
        .bind(name)
        .bind(display_order)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert subcategory")
    }

    /// Insert `count` products attached to a category and/or subcategory.
    ///
    /// # Panics
    ///
    /// Panics if an insert fails.
    pub async fn insert_products(
        &self,
        category_id: Option<i32>,
        subcategory_id: Option<i32>,
        count: usize,
    ) {
        for n in 0..count {
            sqlx::query(
                "INSERT INTO catalog.product (name, category_id, subcategory_id) VALUES ($1, $2, $3)",
            )
            .bind(format!("Product {n}"))
            .bind(category_id)
            .bind(subcategory_id)
            .execute(&self.pool)
            .await
            .expect("Failed to insert product");
        }
    }

    /// Insert a pending order and return its id.
    ///
    /// # Panics
    ///
    /// Panics if the insert fails.
    pub async fn insert_order(&self, email: &str) -> i32 {
        sqlx::query_scalar(
            r#"INSERT INTO sales."order" (email, status, total) VALUES ($1, 'pending', 42.00) RETURNING id"#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert order")
    }
}
