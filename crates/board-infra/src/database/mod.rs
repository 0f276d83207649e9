//! Database connection management and the post repository.

mod connections;
pub mod entity;
mod sqlite_repo;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use sea_orm::DbErr;
pub use sqlite_repo::SqlitePostRepository;
