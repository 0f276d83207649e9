//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//! Posts are persisted to SQLite through SeaORM.

pub mod database;

pub use database::{DatabaseConfig, DatabaseConnections, SqlitePostRepository};
