//! Restaurant-pizza association repository
//!
//! An association row says "this pizza is on this restaurant's menu at
//! this price". Rows are only ever created here; they disappear through
//! cascade when either parent is deleted.

use sqlx::{SqlitePool, Sqlite, Transaction};

use super::{begin_write, DbError, PizzaSummary, Restaurant};
use crate::models::NewRestaurantPizza;

/// A freshly created association with both parents resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizzaWithRelations {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaSummary,
    pub restaurant: Restaurant,
}

/// Restaurant-pizza repository
pub struct RestaurantPizzaRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RestaurantPizzaRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an association after checking both parents exist.
    ///
    /// The existence checks, insert, and commit share one transaction.
    /// A foreign-key failure from the store (parent deleted concurrently)
    /// is reported the same way as a failed existence check.
    pub async fn create(
        &self,
        new: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaWithRelations, DbError> {
        let mut tx = begin_write(self.pool).await?;

        let pizza = fetch_pizza(&mut tx, new.pizza_id)
            .await?
            .ok_or(DbError::MissingReference { resource: "pizza" })?;

        let restaurant = fetch_restaurant(&mut tx, new.restaurant_id)
            .await?
            .ok_or(DbError::MissingReference {
                resource: "restaurant",
            })?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(new.price.get())
        .bind(new.restaurant_id)
        .bind(new.pizza_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_foreign_key_violation)?;

        tx.commit().await.map_err(map_foreign_key_violation)?;

        Ok(RestaurantPizzaWithRelations {
            id,
            price: new.price.get(),
            pizza_id: new.pizza_id,
            restaurant_id: new.restaurant_id,
            pizza,
            restaurant,
        })
    }

    /// Total number of association rows.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

async fn fetch_pizza(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
) -> Result<Option<PizzaSummary>, sqlx::Error> {
    sqlx::query_as::<_, PizzaSummary>("SELECT id, name FROM pizzas WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
}

async fn fetch_restaurant(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
) -> Result<Option<Restaurant>, sqlx::Error> {
    sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
}

fn map_foreign_key_violation(err: sqlx::Error) -> DbError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            DbError::MissingReference {
                resource: "referenced record",
            }
        }
        _ => DbError::Sqlx(err),
    }
}
