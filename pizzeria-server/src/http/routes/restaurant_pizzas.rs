//! Restaurant-pizza association endpoint

use std::sync::Arc;

use axum::{
    body::Bytes, extract::State, http::StatusCode, routing::post, Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::db::repos::{RestaurantPizzaRepo, RestaurantPizzaWithRelations};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::NewRestaurantPizza;

/// Pizza inlined in an association response
#[derive(Debug, Serialize)]
pub struct PizzaRef {
    pub id: i64,
    pub name: String,
}

/// Restaurant inlined in an association response
#[derive(Debug, Serialize)]
pub struct RestaurantRef {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Created association response
#[derive(Debug, Serialize)]
pub struct RestaurantPizzaResponse {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaRef,
    pub restaurant: RestaurantRef,
}

impl From<RestaurantPizzaWithRelations> for RestaurantPizzaResponse {
    fn from(rp: RestaurantPizzaWithRelations) -> Self {
        Self {
            id: rp.id,
            price: rp.price,
            pizza_id: rp.pizza_id,
            restaurant_id: rp.restaurant_id,
            pizza: PizzaRef {
                id: rp.pizza.id,
                name: rp.pizza.name,
            },
            restaurant: RestaurantRef {
                id: rp.restaurant.id,
                name: rp.restaurant.name,
                address: rp.restaurant.address,
            },
        }
    }
}

/// POST /restaurant_pizzas - put a pizza on a restaurant's menu
///
/// The body is parsed by hand so that an empty or malformed body gets the
/// same JSON error as a literal `null`, independent of Content-Type.
#[tracing::instrument(skip(state, body))]
async fn create_restaurant_pizza(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<RestaurantPizzaResponse>), ApiError> {
    let value = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Null) | Err(_) => return Err(ApiError::InvalidJson),
        Ok(value) => value,
    };

    let new = NewRestaurantPizza::from_json(&value)?;
    let created = RestaurantPizzaRepo::new(&state.pool).create(new).await?;

    tracing::info!(
        id = created.id,
        price = created.price,
        pizza_id = created.pizza_id,
        restaurant_id = created.restaurant_id,
        "Created restaurant pizza"
    );

    Ok((StatusCode::CREATED, Json(RestaurantPizzaResponse::from(created))))
}

/// Restaurant-pizza routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}
