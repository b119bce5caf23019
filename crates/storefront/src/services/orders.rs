//! Order status updater.

use tracing::instrument;

use shopfront_core::{OrderId, OrderStatus};

use crate::db::{OrderStore, RepositoryError};
use crate::models::Order;

/// Overwrite an order's status and return the updated record.
///
/// The status is not checked against an enumeration here; the store's
/// schema decides which values are accepted. Concurrent updates to the same
/// order are last-writer-wins.
///
/// # Errors
///
/// - `RepositoryError::NotFound` if no order has this id
/// - `RepositoryError::Validation` if the store rejects the status
/// - any other store failure unchanged
#[instrument(skip(store), fields(order_id = %id, status = %status))]
pub async fn update_order_status<S>(
    store: &S,
    id: OrderId,
    status: &OrderStatus,
) -> Result<Order, RepositoryError>
where
    S: OrderStore + ?Sized,
{
    let order = store.update_order_status(id, status).await?;
    tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");
    Ok(order)
}

/// Fetch a single order.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if no order has this id, or the
/// store's error if the lookup fails.
#[instrument(skip(store), fields(order_id = %id))]
pub async fn get_order<S>(store: &S, id: OrderId) -> Result<Order, RepositoryError>
where
    S: OrderStore + ?Sized,
{
    store.get_order(id).await?.ok_or(RepositoryError::NotFound)
}
