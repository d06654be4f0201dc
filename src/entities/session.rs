//! Session entity - Maps bearer tokens to user identifiers.
//!
//! Issuing sessions is the identity provider's responsibility; this table
//! only lets the API resolve a presented token to a `user_id`. Expired rows
//! are treated as absent.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Session database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// Opaque bearer token presented in the `Authorization` header
    #[sea_orm(primary_key, auto_increment = false)]
    pub token: String,
    /// Identifier of the authenticated user
    pub user_id: String,
    /// When the session stops being valid; `None` means no expiry
    pub expires_at: Option<DateTimeUtc>,
}

/// Sessions have no relations to other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
