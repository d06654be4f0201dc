//! Unified error types for `Casaflow`.
//!
//! All fallible operations in the crate return [`Result`] with this [`Error`]
//! type. Per-source feed failures during a sync run are deliberately *not*
//! represented here: they are recovered locally and reported as data inside
//! the sync report (see [`crate::core::sync`]), so only datastore and
//! request-level failures propagate.

use thiserror::Error;

/// Unified error type for all `Casaflow` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing or invalid settings)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// No valid session was presented with the request
    #[error("No valid session")]
    Unauthorized,

    /// Property does not exist or is not owned by the caller.
    ///
    /// Both cases map to the same variant on purpose: a caller must not be
    /// able to distinguish "missing" from "someone else's".
    #[error("Property not found: {id}")]
    PropertyNotFound {
        /// The property id the caller asked for
        id: i64,
    },

    /// Request payload failed validation
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the validation failure
        message: String,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
