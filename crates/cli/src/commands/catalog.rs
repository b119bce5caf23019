//! Catalog commands.

use shopfront_storefront::services::catalog;

use super::{CliError, connect, print_json};

/// Print the category tree exactly as `GET /categories` serves it.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub async fn list() -> Result<(), CliError> {
    let store = connect().await?;
    let views = catalog::list_categories(&store).await?;

    tracing::info!(categories = views.len(), "Catalog loaded");
    print_json(&views)
}
