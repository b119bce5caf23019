//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod slug;
pub mod status;

pub use id::*;
pub use slug::{FALLBACK_SLUG, derive_slug};
pub use status::{OrderStatus, OrderStatusError};
