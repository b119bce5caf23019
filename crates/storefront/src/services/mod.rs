//! Business logic for the storefront.
//!
//! # Services
//!
//! - `catalog` - Category tree read and projection into client views
//! - `orders` - Order status changes
//!
//! Services take the store as an argument so handlers, the CLI and tests can
//! all drive them with whichever [`Store`](crate::db::Store) they hold.

pub mod catalog;
pub mod orders;

pub use catalog::{CategoryView, SubCategoryView, list_categories};
pub use orders::{get_order, update_order_status};
