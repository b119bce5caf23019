//! Admin order handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Deserialize;
use tracing::instrument;

use shopfront_core::{OrderId, OrderStatus};

use crate::db::RepositoryError;
use crate::error::{AppError, Result};
use crate::models::Order;
use crate::services::orders;
use crate::state::AppState;

/// Message returned when a status update fails in the store.
pub const UPDATE_FAILED: &str = "Failed to update order";

/// Message returned when an order lookup fails in the store.
pub const FETCH_FAILED: &str = "Failed to fetch order";

const NOT_FOUND: &str = "Order not found";

/// Body of `PATCH /admin/orders/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusInput {
    /// New status, passed through to the store.
    pub status: String,
}

/// Show a single order.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Order>> {
    let id = parse_order_id(&id)?;

    let order = orders::get_order(state.store(), id)
        .await
        .map_err(|e| order_error(FETCH_FAILED, e))?;

    Ok(Json(order))
}

/// Overwrite an order's status.
#[instrument(skip(state, body))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<UpdateStatusInput>, JsonRejection>,
) -> Result<Json<Order>> {
    let id = parse_order_id(&id)?;

    let Json(input) = body.map_err(|rejection| {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let status = OrderStatus::parse(&input.status)
        .map_err(|e| AppError::BadRequest(format!("Invalid order status: {e}")))?;

    let order = orders::update_order_status(state.store(), id, &status)
        .await
        .map_err(|e| order_error(UPDATE_FAILED, e))?;

    Ok(Json(order))
}

/// A path segment that isn't an order id can't identify an existing order.
fn parse_order_id(raw: &str) -> Result<OrderId> {
    raw.parse::<OrderId>().map_err(|e| {
        tracing::debug!(error = %e, "Unparseable order id");
        AppError::NotFound(NOT_FOUND.to_string())
    })
}

fn order_error(message: &'static str, err: RepositoryError) -> AppError {
    match err {
        RepositoryError::NotFound => AppError::NotFound(NOT_FOUND.to_string()),
        other => AppError::store(message, other),
    }
}
