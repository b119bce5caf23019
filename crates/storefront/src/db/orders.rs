//! Order queries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use shopfront_core::{OrderId, OrderStatus};

use super::{OrderStore, PgStore, RepositoryError};
use crate::models::Order;

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    email: String,
    status: String,
    total: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            status: row.status,
            total: row.total,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl OrderStore for PgStore {
    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, email, status, total, created_at, updated_at
            FROM sales."order"
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(Order::from))
    }

    async fn update_order_status(
        &self,
        id: OrderId,
        status: &OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            UPDATE sales."order"
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, email, status, total, created_at, updated_at
            "#,
        )
        .bind(status.as_str())
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.map(Order::from).ok_or(RepositoryError::NotFound)
    }
}
