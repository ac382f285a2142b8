//! HTTP server command
//!
//! Migrates the database, then serves the API until Ctrl+C/SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use pizzeria_server::db::{create_pool_with_options, migrate, pool::DEFAULT_MAX_CONNECTIONS};
use pizzeria_server::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5555)
    #[arg(long, short = 'b', default_value = "127.0.0.1:5555")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting pizzeria server on {}", args.bind);

    let pool = create_pool_with_options(&args.database.database_url, args.max_connections)
        .await
        .with_context(|| format!("Failed to open database at {}", args.database.database_url))?;

    migrate(&pool).await.context("Failed to run migrations")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool.clone(), config)
        .await
        .context("Server error")?;

    pool.close().await;
    Ok(())
}
