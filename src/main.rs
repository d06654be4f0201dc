//! Binary entry point: loads configuration, prepares the database, and
//! serves the HTTP API.

use std::sync::Arc;

use casaflow::errors::Result;
use casaflow::feed::HttpCalendarFeed;
use casaflow::{api, config};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load server configuration
    let server_config = config::server::load_server_config()?;

    // 4. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ready."))
        .inspect_err(|e| error!("Failed to create database tables: {}", e))?;

    // 5. Build the feed fetcher with the configured timeout
    let feed = Arc::new(HttpCalendarFeed::new(server_config.feed_timeout)?);

    // 6. Serve the API
    let state = api::AppState { db, feed };
    api::serve(server_config.bind_addr, state).await
}
