//! pizzeria-server: HTTP API over restaurants, pizzas, and menu prices
//!
//! Layers:
//! - `models`: validated request types (price range, association payload)
//! - `db`: connection pool, schema bootstrap, repositories, seed data
//! - `http`: axum routes, JSON error mapping, server lifecycle

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig};
