//! CLI command implementations.

pub mod catalog;
pub mod migrate;
pub mod order;

use shopfront_storefront::config::{ConfigError, StorefrontConfig};
use shopfront_storefront::db::{self, PgStore, RepositoryError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A store operation failed.
    #[error("Store error: {0}")]
    Repository(#[from] RepositoryError),

    /// An argument was rejected before reaching the store.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Connect to the database named by the storefront configuration.
async fn connect() -> Result<PgStore, CliError> {
    let config = StorefrontConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    Ok(PgStore::new(pool))
}

/// Write a value to stdout as pretty JSON.
fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    #[allow(clippy::print_stdout)]
    {
        println!("{rendered}");
    }
    Ok(())
}
