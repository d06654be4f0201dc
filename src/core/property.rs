//! Property business logic - Handles property creation, listing, and ownership checks.
//!
//! Every read or write that targets a specific property goes through
//! [`find_owned`], which conflates "does not exist" and "owned by someone
//! else" into a single not-found outcome so the API never leaks the existence
//! of other users' properties.

use crate::{
    entities::{property, Booking, BookingSource, Expense, Property, PropertyColumn},
    errors::{Error, Result},
};
use sea_orm::{prelude::*, QueryFilter, Set};
use serde::{Deserialize, Serialize};

/// Fields accepted when registering a new property.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    /// Human-readable name
    pub name: String,
    /// Street address
    pub address: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Public Airbnb listing URL
    #[serde(default)]
    pub airbnb_url: Option<String>,
    /// Public Booking.com listing URL
    #[serde(default)]
    pub booking_url: Option<String>,
    /// Airbnb iCal feed URL for booking sync
    #[serde(default)]
    pub airbnb_ical_url: Option<String>,
    /// Booking.com iCal feed URL for booking sync
    #[serde(default)]
    pub booking_ical_url: Option<String>,
}

/// Expense fields included in the property overview
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    /// Expense amount in euros
    pub amount: f64,
    /// When the expense was incurred
    pub date: DateTimeUtc,
    /// Budget category
    pub category: String,
}

/// Booking fields included in the property overview
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    /// Check-in date
    pub start_date: DateTimeUtc,
    /// Check-out date
    pub end_date: DateTimeUtc,
    /// Where the booking came from
    pub source: BookingSource,
    /// Booking revenue, when known
    pub amount: Option<f64>,
}

/// One property together with its expense and booking summaries,
/// as returned by `GET /properties`.
#[derive(Clone, Debug, Serialize)]
pub struct PropertyOverview {
    /// The property record itself
    #[serde(flatten)]
    pub property: property::Model,
    /// Summaries of the property's recorded expenses
    pub expenses: Vec<ExpenseSummary>,
    /// Summaries of the property's bookings
    pub bookings: Vec<BookingSummary>,
}

/// Registers a new property owned by `user_id`.
pub async fn create_property(
    db: &DatabaseConnection,
    user_id: &str,
    input: NewProperty,
) -> Result<property::Model> {
    if input.name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "property name must not be empty".to_string(),
        });
    }
    if input.address.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "property address must not be empty".to_string(),
        });
    }

    let model = property::ActiveModel {
        name: Set(input.name),
        address: Set(input.address),
        description: Set(input.description),
        airbnb_url: Set(input.airbnb_url),
        booking_url: Set(input.booking_url),
        airbnb_ical_url: Set(input.airbnb_ical_url),
        booking_ical_url: Set(input.booking_ical_url),
        user_id: Set(user_id.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Finds a property by id, scoped to its owner.
///
/// Returns [`Error::PropertyNotFound`] both when the id does not exist and
/// when the property belongs to a different user.
pub async fn find_owned(
    db: &DatabaseConnection,
    user_id: &str,
    property_id: i64,
) -> Result<property::Model> {
    Property::find_by_id(property_id)
        .filter(PropertyColumn::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or(Error::PropertyNotFound { id: property_id })
}

/// Lists all of a user's properties with nested expense and booking summaries.
pub async fn list_properties(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<PropertyOverview>> {
    let properties = Property::find()
        .filter(PropertyColumn::UserId.eq(user_id))
        .all(db)
        .await?;

    let mut overviews = Vec::with_capacity(properties.len());
    for prop in properties {
        let expenses = prop
            .find_related(Expense)
            .all(db)
            .await?
            .into_iter()
            .map(|e| ExpenseSummary {
                amount: e.amount,
                date: e.date,
                category: e.category,
            })
            .collect();

        let bookings = prop
            .find_related(Booking)
            .all(db)
            .await?
            .into_iter()
            .map(|b| BookingSummary {
                start_date: b.start_date,
                end_date: b.end_date,
                source: b.source,
                amount: b.amount,
            })
            .collect();

        overviews.push(PropertyOverview {
            property: prop,
            expenses,
            bookings,
        });
    }

    Ok(overviews)
}
