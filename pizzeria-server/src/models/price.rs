//! Menu price validation
//!
//! A price is a whole amount in `1..=30`, matching the `CHECK` constraint
//! on `restaurant_pizzas.price`.

use super::ValidationError;

/// Lowest accepted price
pub const MIN_PRICE: i64 = 1;

/// Highest accepted price
pub const MAX_PRICE: i64 = 30;

/// Validated menu price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(i64);

impl Price {
    /// Create a price, checking the allowed range.
    ///
    /// # Example
    /// ```
    /// use pizzeria_server::models::Price;
    ///
    /// assert!(Price::new(12).is_ok());
    /// assert!(Price::new(0).is_err());
    /// assert!(Price::new(31).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(MIN_PRICE..=MAX_PRICE).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "price",
                value,
                min: MIN_PRICE,
                max: MAX_PRICE,
            });
        }

        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}
