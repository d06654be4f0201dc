//! Request handlers grouped by resource.

/// Calendar view of bookings
pub mod bookings;
/// Expense recording and listing
pub mod expenses;
/// Property CRUD
pub mod properties;
/// Feed synchronization
pub mod sync;

use axum::routing::get;
use axum::{Json, Router};

/// Aggregates all resource routers plus the health probe.
pub fn router() -> Router {
    Router::new()
        .merge(properties::router())
        .merge(bookings::router())
        .merge(expenses::router())
        .merge(sync::router())
        .route("/health", get(get_health))
}

/// Liveness probe.
async fn get_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
