//! Category catalog reader.
//!
//! Loads the category tree from the store and projects it into the shape
//! served at `GET /categories`:
//!
//! ```json
//! [{ "id": "tools", "name": "TOOLS", "count": 0,
//!    "subcategories": [{ "id": "hand-tools", "name": "Hand Tools", "count": 5 }] }]
//! ```

use serde::Serialize;
use tracing::instrument;

use shopfront_core::derive_slug;

use crate::db::{CategoryStore, RepositoryError};
use crate::models::{Category, SubCategory};

/// Client-facing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    /// Slug, or one derived from the name.
    pub id: String,
    /// Display name, uppercased.
    pub name: String,
    /// Products attached directly to the category.
    pub count: i64,
    pub subcategories: Vec<SubCategoryView>,
}

/// Client-facing subcategory. The name keeps its stored casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubCategoryView {
    pub id: String,
    pub name: String,
    pub count: i64,
}

impl From<&SubCategory> for SubCategoryView {
    fn from(subcategory: &SubCategory) -> Self {
        Self {
            id: derive_slug(subcategory.slug.as_deref(), &subcategory.name),
            name: subcategory.name.clone(),
            count: subcategory.product_count,
        }
    }
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        let mut subcategories: Vec<&SubCategory> = category.subcategories.iter().collect();
        subcategories.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        Self {
            id: derive_slug(category.slug.as_deref(), &category.name),
            name: category.name.to_uppercase(),
            count: category.product_count,
            subcategories: subcategories.into_iter().map(SubCategoryView::from).collect(),
        }
    }
}

/// Project stored categories into views, ordered by display order then name.
///
/// Names compare by bytes, matching the `COLLATE "C"` ordering of the
/// catalog query, so rows from the database keep their order. The sort is
/// stable, so the output is the same for any input row order.
#[must_use]
pub fn project_categories(categories: &[Category]) -> Vec<CategoryView> {
    let mut ordered: Vec<&Category> = categories.iter().collect();
    ordered.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    ordered.into_iter().map(CategoryView::from).collect()
}

/// Load the catalog and project it for clients. Read-only.
///
/// # Errors
///
/// Returns the store's error unchanged; mapping to a response is the
/// caller's concern.
#[instrument(skip(store))]
pub async fn list_categories<S>(store: &S) -> Result<Vec<CategoryView>, RepositoryError>
where
    S: CategoryStore + ?Sized,
{
    let categories = store.list_categories().await?;
    let views = project_categories(&categories);
    tracing::debug!(categories = views.len(), "Catalog loaded");
    Ok(views)
}
