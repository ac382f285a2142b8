//! pizzeria CLI - run and administer the pizzeria HTTP service
//!
//! Subcommands:
//! - `serve`: migrate the database and run the HTTP API
//! - `migrate`: create the tables without serving
//! - `seed`: replace all rows with the sample data set

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "pizzeria",
    author,
    version,
    about = "Restaurants, pizzas, and menu prices over a small JSON API"
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables if missing
    Migrate(commands::DatabaseArgs),
    /// Replace database contents with sample restaurants and pizzas
    Seed(commands::DatabaseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init_tracing(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Seed(args) => commands::run_seed(args).await?,
    }

    Ok(())
}
