//! In-process store.
//!
//! Implements the same traits as [`PgStore`](super::PgStore) over plain
//! collections. Used by the router tests and handy for running handlers
//! without a database. Failures can be injected to exercise error paths.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use shopfront_core::{OrderId, OrderStatus};

use super::{CategoryStore, OrderStore, RepositoryError, Store};
use crate::models::{Category, Order};

/// A failure the memory store should report instead of serving requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedFailure {
    /// Behave as if the database cannot be reached.
    Unavailable,
    /// Fail with an unclassified database error.
    Internal,
}

impl SimulatedFailure {
    fn to_error(self) -> RepositoryError {
        match self {
            Self::Unavailable => RepositoryError::Unavailable("simulated outage".to_owned()),
            Self::Internal => {
                RepositoryError::Database(sqlx::Error::Protocol("simulated failure".to_owned()))
            }
        }
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    categories: Vec<Category>,
    orders: BTreeMap<OrderId, Order>,
    allowed_statuses: Option<Vec<String>>,
    failure: Option<SimulatedFailure>,
}

/// Store backed by in-memory collections. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category (with its subcategories) to the catalog.
    pub fn insert_category(&self, category: Category) {
        self.write().categories.push(category);
    }

    /// Add or replace an order.
    pub fn insert_order(&self, order: Order) {
        self.write().orders.insert(order.id, order);
    }

    /// Restrict accepted statuses, mirroring the database CHECK constraint.
    ///
    /// Without a constraint any status is accepted.
    pub fn set_status_constraint(&self, statuses: &[&str]) {
        self.write().allowed_statuses = Some(statuses.iter().map(|s| (*s).to_owned()).collect());
    }

    /// Make every subsequent call fail (or succeed again with `None`).
    pub fn set_failure(&self, failure: Option<SimulatedFailure>) {
        self.write().failure = failure;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, MemoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, MemoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_failure(&self) -> Result<(), RepositoryError> {
        self.read().failure.map_or(Ok(()), |f| Err(f.to_error()))
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        self.check_failure()?;

        let mut categories = self.read().categories.clone();
        categories.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        for category in &mut categories {
            category
                .subcategories
                .sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        }
        Ok(categories)
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        self.check_failure()?;
        Ok(self.read().orders.get(&id).cloned())
    }

    async fn update_order_status(
        &self,
        id: OrderId,
        status: &OrderStatus,
    ) -> Result<Order, RepositoryError> {
        self.check_failure()?;

        let mut state = self.write();
        if let Some(allowed) = &state.allowed_statuses
            && !allowed.iter().any(|s| s == status.as_str())
        {
            return Err(RepositoryError::Validation(format!(
                "status {status:?} violates check constraint \"order_status_check\""
            )));
        }

        let order = state.orders.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        order.status = status.as_str().to_owned();
        order.updated_at = Utc::now();
        Ok(order.clone())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check_failure()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use shopfront_core::{CategoryId, SubCategoryId};

    use super::*;
    use crate::models::SubCategory;

    fn order(id: i32, status: &str) -> Order {
        let now = Utc::now();
        Order {
            id: OrderId::new(id),
            email: "buyer@example.com".to_owned(),
            status: status.to_owned(),
            total: Decimal::new(4999, 2),
            created_at: now,
            updated_at: now,
        }
    }

    fn category(id: i32, name: &str, display_order: i32) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_owned(),
            slug: None,
            display_order,
            product_count: 0,
            subcategories: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_update_then_read_back() {
        let store = MemoryStore::new();
        store.insert_order(order(1, "pending"));

        let status = OrderStatus::parse("shipped").unwrap();
        let updated = store.update_order_status(OrderId::new(1), &status).await.unwrap();
        assert_eq!(updated.status, "shipped");

        let fetched = store.get_order(OrderId::new(1)).await.unwrap().unwrap();
        assert_eq!(fetched.status, "shipped");
    }

    #[tokio::test]
    async fn test_update_unknown_order_is_not_found() {
        let store = MemoryStore::new();
        let status = OrderStatus::parse("paid").unwrap();
        let err = store
            .update_order_status(OrderId::new(404), &status)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_status_constraint_rejects_unknown_value() {
        let store = MemoryStore::new();
        store.insert_order(order(1, "pending"));
        store.set_status_constraint(&["pending", "paid"]);

        let status = OrderStatus::parse("teleported").unwrap();
        let err = store.update_order_status(OrderId::new(1), &status).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Validation(_)));

        let unchanged = store.get_order(OrderId::new(1)).await.unwrap().unwrap();
        assert_eq!(unchanged.status, "pending");
    }

    #[tokio::test]
    async fn test_categories_sorted_like_the_database() {
        let store = MemoryStore::new();
        let mut garden = category(1, "Garden", 2);
        garden.subcategories = vec![
            SubCategory {
                id: SubCategoryId::new(2),
                category_id: CategoryId::new(1),
                name: "Pots".to_owned(),
                slug: None,
                display_order: 1,
                product_count: 0,
            },
            SubCategory {
                id: SubCategoryId::new(1),
                category_id: CategoryId::new(1),
                name: "Hoses".to_owned(),
                slug: None,
                display_order: 1,
                product_count: 0,
            },
        ];
        store.insert_category(garden);
        store.insert_category(category(2, "Bath", 2));
        store.insert_category(category(3, "Tools", 1));

        let listed = store.list_categories().await.unwrap();
        let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Tools", "Bath", "Garden"]);

        let subs: Vec<_> = listed[2].subcategories.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(subs, ["Hoses", "Pots"]);
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let store = MemoryStore::new();
        store.set_failure(Some(SimulatedFailure::Unavailable));
        assert!(matches!(
            store.list_categories().await,
            Err(RepositoryError::Unavailable(_))
        ));
        assert!(store.ping().await.is_err());

        store.set_failure(None);
        assert!(store.ping().await.is_ok());
    }
}
