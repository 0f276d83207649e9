//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::ports::PostRepository;
use board_infra::database::{DatabaseConfig, DatabaseConnections, DbErr, SqlitePostRepository};
use migration::{Migrator, MigratorTrait};

/// Shared application state.
///
/// Cloned into every worker; all clones point at the same connection pool.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub db: Arc<DatabaseConnections>,
}

impl AppState {
    /// Open the database, bring the schema up to date and build the state.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connections = DatabaseConnections::init(config).await?;

        Migrator::up(&connections.conn, None).await?;
        tracing::info!("Database schema is up to date");

        let posts = Arc::new(SqlitePostRepository::new(connections.conn.clone()));

        tracing::info!("Application state initialized");

        Ok(Self {
            posts,
            db: Arc::new(connections),
        })
    }

    /// Release the connection pool.
    pub async fn shutdown(&self) {
        if let Err(e) = self.db.close().await {
            tracing::error!("Failed to close database connection: {}", e);
        }
    }
}
