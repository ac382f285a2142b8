//! Pizza endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{Pizza, PizzaRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Pizza response
#[derive(Debug, Serialize)]
pub struct PizzaResponse {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

impl From<Pizza> for PizzaResponse {
    fn from(p: Pizza) -> Self {
        Self {
            id: p.id,
            name: p.name,
            ingredients: p.ingredients,
        }
    }
}

/// GET /pizzas - list all pizzas
#[tracing::instrument(skip(state))]
async fn list_pizzas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PizzaResponse>>, ApiError> {
    let pizzas = PizzaRepo::new(&state.pool).list().await?;
    Ok(Json(pizzas.into_iter().map(PizzaResponse::from).collect()))
}

/// Pizza routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/pizzas", get(list_pizzas))
}
