//! Order status values.
//!
//! The set of accepted statuses is owned by the database schema (a CHECK
//! constraint on `sales.order.status`). The application only guarantees the
//! value is non-blank and of reasonable length. The value itself is kept
//! exactly as submitted; the store accepts or rejects it.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`OrderStatus`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderStatusError {
    /// The input is empty or only whitespace.
    #[error("status cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("status must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// An order status as submitted by an operator, e.g. `shipped`.
///
/// ```
/// use shopfront_core::OrderStatus;
///
/// assert_eq!(OrderStatus::parse("shipped").unwrap().as_str(), "shipped");
/// assert_eq!(OrderStatus::parse(" shipped ").unwrap().as_str(), " shipped ");
/// assert!(OrderStatus::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct OrderStatus(String);

impl OrderStatus {
    /// Maximum length of a status value.
    pub const MAX_LENGTH: usize = 64;

    /// Parse an `OrderStatus`. The input is kept unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank after trimming or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, OrderStatusError> {
        if s.trim().is_empty() {
            return Err(OrderStatusError::Empty);
        }
        if s.chars().count() > Self::MAX_LENGTH {
            return Err(OrderStatusError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the status as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = OrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = OrderStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.0
    }
}

impl AsRef<str> for OrderStatus {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
