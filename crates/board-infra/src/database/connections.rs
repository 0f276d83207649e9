use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Lifetime and idle limit for the single in-memory connection. Recycling it
/// would drop the database, so it is kept for a year rather than sqlx's
/// default 30 minutes.
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Configuration for the board database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// A private in-memory database, used by tests and throwaway runs.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        }
    }

    /// In-memory SQLite databases exist per connection, so the pool must not
    /// open more than one.
    fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(&self.url);
        opts.connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        if self.is_in_memory() {
            opts.max_connections(1)
                .min_connections(1)
                .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
                .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
        } else {
            opts.max_connections(self.max_connections)
                .min_connections(self.min_connections)
                .idle_timeout(Duration::from_secs(300));
        }

        opts
    }
}

/// Owner of the process-wide connection pool.
///
/// Created once at startup with [`DatabaseConnections::init`] and released
/// with [`DatabaseConnections::close`] after the server stops.
pub struct DatabaseConnections {
    pub conn: DbConn,
}

impl DatabaseConnections {
    /// Open the connection pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = config.connect_options();
        let pool = opts.get_max_connections();

        let conn = Database::connect(opts).await?;
        tracing::info!(?pool, "Database connected");

        Ok(Self { conn })
    }

    /// Close the pool. Outstanding clones of the connection become unusable.
    pub async fn close(&self) -> Result<(), DbErr> {
        tracing::info!("Closing database connection");
        self.conn.clone().close().await
    }
}
