//! Catalog queries.
//!
//! The whole tree is fetched in one round-trip: subcategories are aggregated
//! into a JSON array per category, and product counts are computed in SQL so
//! product rows never leave the database.
//!
//! Names are ordered with the "C" collation (byte order) so the rows arrive
//! in the same order the catalog service sorts them.

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::types::Json;

use shopfront_core::{CategoryId, SubCategoryId};

use super::{CategoryStore, PgStore, RepositoryError};
use crate::models::{Category, SubCategory};

const LIST_CATEGORIES_SQL: &str = r#"
    SELECT c.id,
           c.name,
           c.slug,
           c.display_order,
           (SELECT COUNT(*) FROM catalog.product p WHERE p.category_id = c.id) AS product_count,
           COALESCE(
               (SELECT json_agg(
                           json_build_object(
                               'id', s.id,
                               'category_id', s.category_id,
                               'name', s.name,
                               'slug', s.slug,
                               'display_order', s.display_order,
                               'product_count',
                               (SELECT COUNT(*) FROM catalog.product sp WHERE sp.subcategory_id = s.id)
                           )
                           ORDER BY s.display_order ASC, s.name COLLATE "C" ASC
                       )
                FROM catalog.subcategory s
                WHERE s.category_id = c.id),
               '[]'::json
           ) AS subcategories
    FROM catalog.category c
    ORDER BY c.display_order ASC, c.name COLLATE "C" ASC
"#;

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: CategoryId,
    name: String,
    slug: Option<String>,
    display_order: i32,
    product_count: i64,
    subcategories: Json<Vec<SubCategoryRow>>,
}

#[derive(Deserialize)]
struct SubCategoryRow {
    id: i32,
    category_id: i32,
    name: String,
    slug: Option<String>,
    display_order: i32,
    product_count: i64,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            display_order: row.display_order,
            product_count: row.product_count,
            subcategories: row.subcategories.0.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SubCategoryRow> for SubCategory {
    fn from(row: SubCategoryRow) -> Self {
        Self {
            id: SubCategoryId::new(row.id),
            category_id: CategoryId::new(row.category_id),
            name: row.name,
            slug: row.slug,
            display_order: row.display_order,
            product_count: row.product_count,
        }
    }
}

#[async_trait]
impl CategoryStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(LIST_CATEGORIES_SQL)
            .fetch_all(self.pool())
            .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }
}
