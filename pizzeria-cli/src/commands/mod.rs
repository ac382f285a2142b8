//! Command implementations for pizzeria CLI

pub mod database;
pub mod serve;

pub use database::{run_migrate, run_seed, DatabaseArgs};
pub use serve::run_serve;
