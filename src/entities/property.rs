//! Property entity - Represents one managed rental unit.
//!
//! Each property is owned by exactly one user (identified by the `user_id`
//! issued by the identity provider) and optionally carries iCal feed URLs,
//! one per external booking source.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Property database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the property
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the property (e.g., "Apartamento Centro")
    pub name: String,
    /// Street address
    pub address: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Public Airbnb listing URL, if listed there
    pub airbnb_url: Option<String>,
    /// Public Booking.com listing URL, if listed there
    pub booking_url: Option<String>,
    /// Airbnb iCal feed URL used for booking synchronization
    pub airbnb_ical_url: Option<String>,
    /// Booking.com iCal feed URL used for booking synchronization
    pub booking_ical_url: Option<String>,
    /// Identifier of the owning user, as issued by the identity provider
    pub user_id: String,
    /// When the property was registered
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Property and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One property has many bookings
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
    /// One property has many expenses
    #[sea_orm(has_many = "super::expense::Entity")]
    Expenses,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
