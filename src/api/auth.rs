//! Session extraction for authenticated endpoints.
//!
//! Every protected handler takes a [`SessionUser`] argument; the extractor
//! reads the `Authorization: Bearer <token>` header and resolves it against
//! the session store. Missing, malformed, unknown, and expired tokens all
//! reject with 401.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::core::session;
use crate::errors::Error;

/// The authenticated caller's user id.
#[derive(Debug, Clone)]
pub struct SessionUser(pub String);

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = parts
            .extensions
            .get::<Arc<AppState>>()
            .cloned()
            .ok_or_else(|| {
                ApiError(Error::Config {
                    message: "AppState extension missing".to_string(),
                })
            })?;

        let authz = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(Error::Unauthorized)
            .map_err(ApiError)?
            .to_str()
            .map_err(|_| ApiError(Error::Unauthorized))?;

        let token = authz
            .strip_prefix("Bearer ")
            .or_else(|| authz.strip_prefix("bearer "))
            .ok_or(ApiError(Error::Unauthorized))?
            .trim();

        match session::resolve_session(&state.db, token).await.map_err(ApiError)? {
            Some(user_id) => Ok(Self(user_id)),
            None => Err(ApiError(Error::Unauthorized)),
        }
    }
}
