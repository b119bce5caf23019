//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::CatalogCacheConfig;
use crate::db::Store;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The store is constructed once at startup and
/// injected here; handlers never open their own connections.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn Store>,
    catalog_cache: CatalogCacheConfig,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `store` - Persistent store (Postgres in production, memory in tests)
    /// * `catalog_cache` - Cache-Control settings for the catalog listing
    #[must_use]
    pub fn new(store: Arc<dyn Store>, catalog_cache: CatalogCacheConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                catalog_cache,
            }),
        }
    }

    /// Get a reference to the persistent store.
    #[must_use]
    pub fn store(&self) -> &dyn Store {
        self.inner.store.as_ref()
    }

    /// Get the catalog Cache-Control settings.
    #[must_use]
    pub fn catalog_cache(&self) -> CatalogCacheConfig {
        self.inner.catalog_cache
    }
}
