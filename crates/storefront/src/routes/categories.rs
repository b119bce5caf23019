//! Catalog route handlers.

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header::CACHE_CONTROL},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::catalog;
use crate::state::AppState;

/// Message returned when the catalog cannot be loaded.
pub const FETCH_FAILED: &str = "Failed to fetch categories";

/// List every category with subcategories and product counts.
///
/// Only successful responses are marked shared-cacheable.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Response> {
    let categories = catalog::list_categories(state.store())
        .await
        .map_err(|e| AppError::store(FETCH_FAILED, e))?;

    let cache_control = HeaderValue::from_str(&state.catalog_cache().header_value())
        .map_err(|e| AppError::Internal(format!("invalid cache header: {e}")))?;

    Ok(([(CACHE_CONTROL, cache_control)], Json(categories)).into_response())
}
