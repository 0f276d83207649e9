//! # Anonymous Board API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::cors::open_cors;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Anonymous Board API on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::init(&config.database)
        .await
        .with_context(|| format!("failed to open database at {}", config.database.url))?;

    let server_state = state.clone();
    let max_body_bytes = config.max_body_bytes;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .wrap(open_cors())
            .app_data(web::Data::new(server_state.clone()))
            .app_data(handlers::json_config(max_body_bytes))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    tracing::info!("Server stopped");
    state.shutdown().await;

    Ok(())
}
