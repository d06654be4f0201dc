//! `GET /expenses` and `POST /expenses`.

use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Deserialize;

use crate::api::auth::SessionUser;
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::core::expense::{self, NewExpense};
use crate::entities::expense::Model as ExpenseModel;

/// Routes for the expense resource.
pub fn router() -> Router {
    Router::new().route("/expenses", get(list).post(create))
}

/// Query parameters accepted by `GET /expenses`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpensesQuery {
    /// Restrict results to one property
    #[serde(default)]
    property_id: Option<i64>,
}

/// Lists the caller's expenses, newest first.
#[tracing::instrument(level = "debug", skip_all)]
async fn list(
    SessionUser(user_id): SessionUser,
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<ExpensesQuery>,
) -> Result<Json<Vec<ExpenseModel>>, ApiError> {
    let expenses = expense::list_expenses(&state.db, &user_id, query.property_id).await?;
    Ok(Json(expenses))
}

/// Records a new expense against one of the caller's properties.
#[tracing::instrument(level = "info", skip_all)]
async fn create(
    SessionUser(user_id): SessionUser,
    Extension(state): Extension<Arc<AppState>>,
    Json(input): Json<NewExpense>,
) -> Result<(StatusCode, Json<ExpenseModel>), ApiError> {
    let created = expense::create_expense(&state.db, &user_id, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
