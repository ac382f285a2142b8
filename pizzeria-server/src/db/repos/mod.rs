//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Uses JOINs to resolve associations (no per-row follow-up queries)
//! - Multi-step reads and writes run inside one transaction
//! - Rows come back as plain records; shaping for JSON happens in routes

pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

pub use pizzas::{Pizza, PizzaRepo, PizzaSummary};
pub use restaurant_pizzas::{RestaurantPizzaRepo, RestaurantPizzaWithRelations};
pub use restaurants::{Restaurant, RestaurantRepo, RestaurantWithPizzas};

use sqlx::{Sqlite, SqlitePool, Transaction};

/// Begin a transaction holding the write lock from the start.
///
/// Writers that read first must not upgrade a deferred transaction:
/// SQLite answers a contended upgrade with SQLITE_BUSY immediately,
/// while a contended `BEGIN IMMEDIATE` waits out the busy timeout.
pub async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },

    /// A write referenced a row that does not exist.
    #[error("{resource} not found")]
    MissingReference { resource: &'static str },
}
