//! Restaurant endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{PizzaSummary, Restaurant, RestaurantRepo, RestaurantWithPizzas};
use crate::http::error::ApiError;
use crate::http::extractors::RestaurantId;
use crate::http::server::AppState;

/// Restaurant response (list shape, no menu)
#[derive(Debug, Serialize)]
pub struct RestaurantResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

/// Pizza entry under a restaurant. `id` is the pizza's id.
#[derive(Debug, Serialize)]
pub struct RestaurantPizzaEntry {
    pub id: i64,
    pub name: String,
}

impl From<PizzaSummary> for RestaurantPizzaEntry {
    fn from(p: PizzaSummary) -> Self {
        Self {
            id: p.id,
            name: p.name,
        }
    }
}

/// Restaurant detail response
#[derive(Debug, Serialize)]
pub struct RestaurantDetailResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

impl From<RestaurantWithPizzas> for RestaurantDetailResponse {
    fn from(r: RestaurantWithPizzas) -> Self {
        Self {
            id: r.restaurant.id,
            name: r.restaurant.name,
            address: r.restaurant.address,
            restaurant_pizzas: r.pizzas.into_iter().map(RestaurantPizzaEntry::from).collect(),
        }
    }
}

/// GET /restaurants - list all restaurants
#[tracing::instrument(skip(state))]
async fn list_restaurants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RestaurantResponse>>, ApiError> {
    let restaurants = RestaurantRepo::new(&state.pool).list().await?;
    Ok(Json(
        restaurants.into_iter().map(RestaurantResponse::from).collect(),
    ))
}

/// GET /restaurants/{id} - restaurant with the pizzas it offers
#[tracing::instrument(skip(state, id), fields(id = id.0))]
async fn get_restaurant(
    State(state): State<Arc<AppState>>,
    id: RestaurantId,
) -> Result<Json<RestaurantDetailResponse>, ApiError> {
    let restaurant = RestaurantRepo::new(&state.pool).get_with_pizzas(id.0).await?;
    Ok(Json(RestaurantDetailResponse::from(restaurant)))
}

/// DELETE /restaurants/{id} - delete a restaurant and its menu rows
#[tracing::instrument(skip(state, id), fields(id = id.0))]
async fn delete_restaurant(
    State(state): State<Arc<AppState>>,
    id: RestaurantId,
) -> Result<StatusCode, ApiError> {
    let cascaded = RestaurantRepo::new(&state.pool).delete(id.0).await?;
    tracing::info!(restaurant_id = id.0, cascaded, "Deleted restaurant");

    Ok(StatusCode::NO_CONTENT)
}

/// Restaurant routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}
