//! Database maintenance commands: migrate and seed

use anyhow::{Context, Result};
use clap::Args;
use pizzeria_server::db::{create_pool, migrate, seed, SqlitePool};

/// Default database location, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";

/// Database connection arguments shared by all subcommands
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL
    #[arg(long, env = "DB_URI", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

impl DatabaseArgs {
    pub async fn connect(&self) -> Result<SqlitePool> {
        create_pool(&self.database_url)
            .await
            .with_context(|| format!("Failed to open database at {}", self.database_url))
    }
}

/// Create the tables
pub async fn run_migrate(args: DatabaseArgs) -> Result<()> {
    let pool = args.connect().await?;
    migrate(&pool).await.context("Failed to run migrations")?;
    pool.close().await;
    Ok(())
}

/// Create the tables, then replace their contents with sample data
pub async fn run_seed(args: DatabaseArgs) -> Result<()> {
    let pool = args.connect().await?;
    migrate(&pool).await.context("Failed to run migrations")?;

    let summary = seed(&pool).await.context("Failed to seed database")?;
    println!(
        "Seeded {} restaurants, {} pizzas, {} restaurant pizzas",
        summary.restaurants, summary.pizzas, summary.restaurant_pizzas
    );

    pool.close().await;
    Ok(())
}
