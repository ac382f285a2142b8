//! Restaurant repository
//!
//! - list: all restaurants, no menu
//! - get_with_pizzas: restaurant plus its menu via JOIN, one transaction
//! - delete: cascade removes the restaurant's menu rows

use sqlx::{FromRow, SqlitePool};

use super::{begin_write, DbError, PizzaSummary};

/// Restaurant record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Restaurant with every pizza it offers
///
/// One entry per association row, so a pizza offered twice at
/// different prices appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantWithPizzas {
    pub restaurant: Restaurant,
    pub pizzas: Vec<PizzaSummary>,
}

/// Restaurant repository
pub struct RestaurantRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RestaurantRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every restaurant in id order.
    pub async fn list(&self) -> Result<Vec<Restaurant>, DbError> {
        let restaurants = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(restaurants)
    }

    /// Get a restaurant and the pizzas reachable through its menu rows.
    pub async fn get_with_pizzas(&self, id: i64) -> Result<RestaurantWithPizzas, DbError> {
        let mut tx = self.pool.begin().await?;

        let restaurant = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound {
            resource: "restaurant",
            id,
        })?;

        let pizzas = sqlx::query_as::<_, PizzaSummary>(
            r#"
            SELECT p.id, p.name
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(RestaurantWithPizzas { restaurant, pizzas })
    }

    /// Delete a restaurant. Returns how many menu rows went with it.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut tx = begin_write(self.pool).await?;

        let cascaded: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas WHERE restaurant_id = ?")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        let result = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "restaurant",
                id,
            });
        }

        tx.commit().await?;

        Ok(cascaded as u64)
    }
}
