//! Association payload for `POST /restaurant_pizzas`

use serde_json::Value;

use super::{Price, ValidationError};

/// Validated request to offer a pizza at a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: Price,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl NewRestaurantPizza {
    /// Build from an already-parsed JSON body.
    ///
    /// The price is checked first, so a body with a bad price and a bad
    /// id reports the price.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let obj = body.as_object().ok_or(ValidationError::NotAnObject)?;

        let price = Price::new(integer_field(obj, "price")?)?;
        let pizza_id = integer_field(obj, "pizza_id")?;
        let restaurant_id = integer_field(obj, "restaurant_id")?;

        Ok(Self {
            price,
            pizza_id,
            restaurant_id,
        })
    }
}

fn integer_field(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<i64, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        Some(v) => v.as_i64().ok_or(ValidationError::InvalidType { field }),
    }
}
