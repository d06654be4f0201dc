//! `GET /properties` and `POST /properties`.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Json, Router};

use crate::api::auth::SessionUser;
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::core::property::{self, NewProperty, PropertyOverview};
use crate::entities::property::Model as PropertyModel;

/// Routes for the property resource.
pub fn router() -> Router {
    Router::new().route("/properties", get(list).post(create))
}

/// Lists the caller's properties with nested expense and booking summaries.
#[tracing::instrument(level = "debug", skip_all)]
async fn list(
    SessionUser(user_id): SessionUser,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<PropertyOverview>>, ApiError> {
    let overviews = property::list_properties(&state.db, &user_id).await?;
    Ok(Json(overviews))
}

/// Registers a new property owned by the caller.
#[tracing::instrument(level = "info", skip_all)]
async fn create(
    SessionUser(user_id): SessionUser,
    Extension(state): Extension<Arc<AppState>>,
    Json(input): Json<NewProperty>,
) -> Result<(StatusCode, Json<PropertyModel>), ApiError> {
    let created = property::create_property(&state.db, &user_id, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
