//! Schema bootstrap for the three pizzeria tables

use sqlx::SqlitePool;

/// Create tables if they do not exist yet. Safe to run on every start.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            address TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pizzas (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            ingredients TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS restaurant_pizzas (
            id INTEGER PRIMARY KEY,
            price INTEGER NOT NULL CHECK (price BETWEEN 1 AND 30),
            restaurant_id INTEGER NOT NULL
                CONSTRAINT fk_restaurant_pizzas_restaurant_id_restaurants
                REFERENCES restaurants(id) ON DELETE CASCADE,
            pizza_id INTEGER NOT NULL
                CONSTRAINT fk_restaurant_pizzas_pizza_id_pizzas
                REFERENCES pizzas(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_restaurant ON restaurant_pizzas(restaurant_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_pizza ON restaurant_pizzas(pizza_id)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema migrations complete");
    Ok(())
}
