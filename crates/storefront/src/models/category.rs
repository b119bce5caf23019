//! Catalog domain types.

use shopfront_core::{CategoryId, SubCategoryId};

/// A top-level catalog category with its subcategories loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Explicit URL slug; derived from `name` when absent.
    pub slug: Option<String>,
    /// Ascending sort key for presentation.
    pub display_order: i32,
    /// Products attached directly to this category (not via a subcategory).
    pub product_count: i64,
    pub subcategories: Vec<SubCategory>,
}

/// A subcategory, belonging to exactly one [`Category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategory {
    pub id: SubCategoryId,
    pub category_id: CategoryId,
    pub name: String,
    pub slug: Option<String>,
    pub display_order: i32,
    pub product_count: i64,
}

impl Category {
    /// Presentation sort key: display order, then name (byte order).
    #[must_use]
    pub fn sort_key(&self) -> (i32, &str) {
        (self.display_order, &self.name)
    }
}

impl SubCategory {
    /// Presentation sort key: display order, then name (byte order).
    #[must_use]
    pub fn sort_key(&self) -> (i32, &str) {
        (self.display_order, &self.name)
    }
}
