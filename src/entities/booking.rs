//! Booking entity - Represents one reserved date range for a property.
//!
//! Bookings are either imported from an external iCal feed (Airbnb or
//! Booking.com) or entered directly. The whole batch for a
//! (property, source) pair is deleted and recreated on every sync run;
//! imported rows are never updated individually.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Origin of a booking. Stored as an uppercase string in the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum BookingSource {
    /// Imported from the property's Airbnb iCal feed
    #[sea_orm(string_value = "AIRBNB")]
    Airbnb,
    /// Imported from the property's Booking.com iCal feed
    #[sea_orm(string_value = "BOOKING")]
    Booking,
    /// Entered by the owner directly
    #[sea_orm(string_value = "DIRECT")]
    Direct,
    /// Any other origin
    #[sea_orm(string_value = "OTHER")]
    Other,
}

impl BookingSource {
    /// Lowercase tag used by the calendar frontend.
    ///
    /// Total mapping with an exhaustive match: any source that is not one of
    /// the two synchronized feeds collapses to `"other"`, so adding a new
    /// variant forces this function to be revisited at compile time.
    #[must_use]
    pub const fn display_tag(self) -> &'static str {
        match self {
            Self::Airbnb => "airbnb",
            Self::Booking => "booking",
            Self::Direct | Self::Other => "other",
        }
    }

    /// Guest name recorded when a feed event carries no summary.
    #[must_use]
    pub const fn default_guest_name(self) -> &'static str {
        match self {
            Self::Airbnb => "Huésped de Airbnb",
            Self::Booking => "Huésped de Booking",
            Self::Direct | Self::Other => "Huésped",
        }
    }

    /// Human-readable source name used in sync report messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Airbnb => "Airbnb",
            Self::Booking => "Booking",
            Self::Direct => "Directo",
            Self::Other => "Otro",
        }
    }
}

/// Booking database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the booking
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the property this booking belongs to
    pub property_id: i64,
    /// Check-in date and time (UTC)
    pub start_date: DateTimeUtc,
    /// Check-out date and time (UTC)
    pub end_date: DateTimeUtc,
    /// Guest name, or a source-specific placeholder when the feed had none
    pub guest_name: String,
    /// Where this booking came from
    pub source: BookingSource,
    /// UID of the originating feed event, kept for future reference
    pub external_id: Option<String>,
    /// Booking revenue, when known (direct bookings only; feeds carry none)
    pub amount: Option<f64>,
}

/// Defines relationships between Booking and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each booking belongs to one property
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id"
    )]
    Property,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
