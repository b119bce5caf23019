//! Database access for the storefront `PostgreSQL`.
//!
//! # Schemas
//!
//! - `catalog.category`, `catalog.subcategory`, `catalog.product` - the catalog tree
//! - `sales.order` - orders; the status CHECK constraint lives here
//!
//! # Store traits
//!
//! Handlers never touch the pool directly. They go through the [`Store`]
//! trait object held in `AppState`, which is either a [`PgStore`] (production)
//! or a [`memory::MemoryStore`] (tests and local experiments).
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p shopfront-cli -- migrate
//! ```

pub mod categories;
pub mod memory;
pub mod orders;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::error::ErrorKind;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use shopfront_core::{OrderId, OrderStatus};

use crate::models::{Category, Order};

pub use memory::MemoryStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Unclassified database error from sqlx.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// The store rejected the write (check, not-null or foreign key constraint).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Unique constraint violation.
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// The store could not be reached (pool exhausted, connection dropped).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::ForeignKeyViolation => {
                    return Self::Validation(db_err.message().to_owned());
                }
                ErrorKind::UniqueViolation => return Self::Conflict(db_err.message().to_owned()),
                _ => {}
            }
        }

        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Unavailable(err.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::DataCorruption(err.to_string())
            }
            _ => Self::Database(err),
        }
    }
}

/// Read access to the catalog tree.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Load every category with its subcategories and direct product counts.
    ///
    /// Implementations return categories and subcategories ordered by
    /// `(display_order, name)`.
    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError>;
}

/// Keyed access to orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Fetch a single order.
    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;

    /// Overwrite an order's status and return the updated record.
    ///
    /// Returns `RepositoryError::NotFound` when no order has this id.
    async fn update_order_status(
        &self,
        id: OrderId,
        status: &OrderStatus,
    ) -> Result<Order, RepositoryError>;
}

/// The complete persistent store used by the application.
#[async_trait]
pub trait Store: CategoryStore + OrderStore {
    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// `PostgreSQL`-backed store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn test_pool_errors_map_to_unavailable() {
        assert!(matches!(
            RepositoryError::from(sqlx::Error::PoolTimedOut),
            RepositoryError::Unavailable(_)
        ));
        assert!(matches!(
            RepositoryError::from(sqlx::Error::PoolClosed),
            RepositoryError::Unavailable(_)
        ));
    }

    #[test]
    fn test_other_errors_stay_database() {
        let err = RepositoryError::from(sqlx::Error::Protocol("bad frame".to_owned()));
        assert!(matches!(err, RepositoryError::Database(_)));
        assert!(err.to_string().starts_with("database error: "));
    }
}
