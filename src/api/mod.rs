//! HTTP API - axum router, shared state, and server entry point.

/// Bearer-token session extraction
pub mod auth;
/// Error-to-response mapping
pub mod error;
/// Request handlers grouped by resource
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Extension, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::errors::Result;
use crate::feed::CalendarFeed;

/// Shared state available to every request handler.
pub struct AppState {
    /// Database handle
    pub db: DatabaseConnection,
    /// Calendar feed implementation used by the sync endpoint
    pub feed: Arc<dyn CalendarFeed>,
}

/// Builds the application router with tracing and permissive CORS.
pub fn router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .merge(routes::router())
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Binds `addr` and serves the API until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
