//! `POST /calendar/sync` - feed synchronization for one property.

use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Json, Router};
use serde::Deserialize;

use crate::api::auth::SessionUser;
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::core::sync::{self, SyncReport};

/// Routes for calendar synchronization.
pub fn router() -> Router {
    Router::new().route("/calendar/sync", post(run))
}

/// Request body for `POST /calendar/sync`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SyncRequest {
    /// Property to synchronize
    property_id: i64,
}

/// Runs the per-source sync and returns the aggregate report.
///
/// Feed failures show up inside the report; only ownership failures (404)
/// and datastore failures (500) surface as error responses.
#[tracing::instrument(level = "info", skip_all)]
async fn run(
    SessionUser(user_id): SessionUser,
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<SyncRequest>,
) -> Result<Json<SyncReport>, ApiError> {
    let report = sync::sync_property(
        &state.db,
        state.feed.as_ref(),
        &user_id,
        request.property_id,
    )
    .await?;
    Ok(Json(report))
}
