//! Sample data for local development
//!
//! Replaces the contents of all three tables with a fixed set of
//! restaurants, pizzas, and menu prices. Ids are explicit so the seeded
//! rows are stable across runs.

use sqlx::SqlitePool;

use super::{begin_write, DbError};

const RESTAURANTS: &[(i64, &str, &str)] = &[
    (1, "Dough Bros", "1 Main St"),
    (2, "Crust Club", "9 Elm Ave, Springfield"),
    (3, "Slice of Heaven", "402 Harbor Rd"),
];

const PIZZAS: &[(i64, &str, &str)] = &[
    (1, "Margherita", "Tomato, Mozzarella"),
    (2, "Pepperoni", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    (3, "Geri", "Dough, Tomato Sauce, Cheese, Spinach"),
    (4, "Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

// (price, restaurant_id, pizza_id)
const MENU: &[(i64, i64, i64)] = &[
    (12, 1, 1),
    (14, 1, 2),
    (10, 2, 1),
    (16, 2, 3),
    (9, 3, 4),
    (18, 3, 2),
];

/// Row counts written by [`seed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Wipe all tables and insert the sample data in one transaction.
pub async fn seed(pool: &SqlitePool) -> Result<SeedSummary, DbError> {
    let mut tx = begin_write(pool).await?;

    sqlx::query("DELETE FROM restaurant_pizzas").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM pizzas").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM restaurants").execute(&mut *tx).await?;

    for &(id, name, address) in RESTAURANTS {
        sqlx::query("INSERT INTO restaurants (id, name, address) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(address)
            .execute(&mut *tx)
            .await?;
    }

    for &(id, name, ingredients) in PIZZAS {
        sqlx::query("INSERT INTO pizzas (id, name, ingredients) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(ingredients)
            .execute(&mut *tx)
            .await?;
    }

    for &(price, restaurant_id, pizza_id) in MENU {
        sqlx::query(
            "INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?)",
        )
        .bind(price)
        .bind(restaurant_id)
        .bind(pizza_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        restaurants: RESTAURANTS.len(),
        pizzas: PIZZAS.len(),
        restaurant_pizzas: MENU.len(),
    };
    tracing::info!(?summary, "Seeded sample data");

    Ok(summary)
}
