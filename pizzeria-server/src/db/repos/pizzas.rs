//! Pizza repository

use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Pizza record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// Pizza id and name, as inlined under a restaurant or an association
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PizzaSummary {
    pub id: i64,
    pub name: String,
}

/// Pizza repository
pub struct PizzaRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PizzaRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every pizza in id order.
    pub async fn list(&self) -> Result<Vec<Pizza>, DbError> {
        let pizzas = sqlx::query_as::<_, Pizza>(
            "SELECT id, name, ingredients FROM pizzas ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(pizzas)
    }
}
