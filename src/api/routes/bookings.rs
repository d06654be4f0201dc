//! `GET /bookings` - calendar events across the caller's properties.

use std::sync::Arc;

use axum::extract::Query;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Deserialize;

use crate::api::auth::SessionUser;
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::core::booking::{self, CalendarEvent};

/// Routes for the booking resource.
pub fn router() -> Router {
    Router::new().route("/bookings", get(list))
}

/// Query parameters accepted by `GET /bookings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingsQuery {
    /// Restrict results to one property
    #[serde(default)]
    property_id: Option<i64>,
}

/// Lists calendar events, ordered by start date, with display source tags.
#[tracing::instrument(level = "debug", skip_all)]
async fn list(
    SessionUser(user_id): SessionUser,
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let events = booking::list_calendar_events(&state.db, &user_id, query.property_id).await?;
    Ok(Json(events))
}
