//! Domain models for the storefront.
//!
//! These types represent records as loaded from the store, separate from the
//! database row types and from the JSON views returned to clients.

pub mod category;
pub mod order;

pub use category::{Category, SubCategory};
pub use order::Order;
