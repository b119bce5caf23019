//! Order commands.

use shopfront_core::{OrderId, OrderStatus};
use shopfront_storefront::services::orders;

use super::{CliError, connect, print_json};

/// Overwrite an order's status and print the updated order.
///
/// # Errors
///
/// Returns an error if the status is blank, the order does not exist, or the
/// store rejects the value.
pub async fn set_status(id: i32, status: &str) -> Result<(), CliError> {
    let status =
        OrderStatus::parse(status).map_err(|e| CliError::InvalidArgument(e.to_string()))?;

    let store = connect().await?;
    let order = orders::update_order_status(&store, OrderId::new(id), &status).await?;

    print_json(&order)
}

/// Print a single order.
///
/// # Errors
///
/// Returns an error if the order does not exist or the lookup fails.
pub async fn show(id: i32) -> Result<(), CliError> {
    let store = connect().await?;
    let order = orders::get_order(&store, OrderId::new(id)).await?;

    print_json(&order)
}
