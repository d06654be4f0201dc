//! Maps crate errors onto HTTP responses.
//!
//! Clients only ever see a status code and a short Spanish message; internal
//! detail (datastore errors in particular) is logged server-side and replaced
//! by a generic body so nothing about the backing store leaks out.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::errors::Error;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Wrapper turning [`Error`] into an axum response.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub Error);

impl ApiError {
    const fn status_code(&self) -> StatusCode {
        match &self.0 {
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::PropertyNotFound { .. } => StatusCode::NOT_FOUND,
            Error::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Error::Config { .. } | Error::Database(_) | Error::Io(_) | Error::EnvVar(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        let error = match code {
            StatusCode::UNAUTHORIZED => "No autorizado".to_string(),
            StatusCode::NOT_FOUND => "Propiedad no encontrada o no autorizada".to_string(),
            StatusCode::BAD_REQUEST => self.0.to_string(),
            _ => {
                tracing::error!(error = %self.0, "request failed");
                "Error interno del servidor".to_string()
            }
        };
        (code, Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(Error::Unauthorized).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError(Error::PropertyNotFound { id: 1 }).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(Error::InvalidInput {
                message: "bad".to_string()
            })
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(Error::Config {
                message: "broken".to_string()
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
