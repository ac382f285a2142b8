//! Domain models with validation at construction
//!
//! User input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod price;
pub mod restaurant_pizza;
pub mod validation;

pub use price::Price;
pub use restaurant_pizza::NewRestaurantPizza;
pub use validation::ValidationError;
