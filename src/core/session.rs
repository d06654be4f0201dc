//! Session business logic - Resolves bearer tokens to user identifiers.
//!
//! Sessions are issued by the external identity provider; this module only
//! resolves presented tokens and offers a provisioning helper used by tests
//! and operational tooling.

use crate::{
    entities::{session, Session},
    errors::Result,
};
use sea_orm::{prelude::*, Set};

/// Resolves a bearer token to the user it authenticates.
///
/// Returns `None` for unknown tokens and for sessions whose expiry has
/// passed; the caller decides how to surface that (the API maps it to 401).
pub async fn resolve_session(db: &DatabaseConnection, token: &str) -> Result<Option<String>> {
    let Some(session) = Session::find_by_id(token).one(db).await? else {
        return Ok(None);
    };

    if let Some(expires_at) = session.expires_at {
        if expires_at < chrono::Utc::now() {
            return Ok(None);
        }
    }

    Ok(Some(session.user_id))
}

/// Provisions a session for `user_id` with a fresh random token.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: &str,
    expires_at: Option<DateTimeUtc>,
) -> Result<session::Model> {
    let model = session::ActiveModel {
        token: Set(uuid::Uuid::new_v4().to_string()),
        user_id: Set(user_id.to_string()),
        expires_at: Set(expires_at),
    };

    model.insert(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_resolve_session_round_trip() -> Result<()> {
        let db = setup_test_db().await?;
        let session = create_session(&db, "user1", None).await?;

        let resolved = resolve_session(&db, &session.token).await?;
        assert_eq!(resolved.as_deref(), Some("user1"));

        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_session_unknown_token() -> Result<()> {
        let db = setup_test_db().await?;

        let resolved = resolve_session(&db, "not-a-token").await?;
        assert!(resolved.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_session_honors_expiry() -> Result<()> {
        let db = setup_test_db().await?;

        let expired = create_session(&db, "user1", Some(Utc::now() - Duration::hours(1))).await?;
        assert!(resolve_session(&db, &expired.token).await?.is_none());

        let valid = create_session(&db, "user1", Some(Utc::now() + Duration::hours(1))).await?;
        assert_eq!(
            resolve_session(&db, &valid.token).await?.as_deref(),
            Some("user1")
        );

        Ok(())
    }
}
