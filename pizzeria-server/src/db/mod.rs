//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - Foreign keys enforced on every connection; deletes cascade in the store
//! - Explicit query functions per shape, no lazily-walked object graph
//! - One transaction per multi-statement operation

pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::migrate;
pub use seed::{seed, SeedSummary};
pub use sqlx::SqlitePool;
