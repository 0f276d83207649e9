//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use board_infra::database::DatabaseConfig;

const DEFAULT_DATABASE_URL: &str = "sqlite://board.db?mode=rwc";
const DEFAULT_MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on a create-post request body.
    pub max_body_bytes: usize,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to
    /// defaults for missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS").unwrap_or(5),
            min_connections: parse_var(&lookup, "DB_MIN_CONNECTIONS").unwrap_or(1),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, "PORT").unwrap_or(8000),
            max_body_bytes: parse_var(&lookup, "MAX_BODY_BYTES").unwrap_or(DEFAULT_MAX_BODY_BYTES),
            database,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.parse().ok())
}
