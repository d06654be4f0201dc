//! Booking business logic - Listing for the calendar view and feed-driven replacement.
//!
//! The replacement operation implements the sync contract: all stored
//! bookings for one (property, source) pair are discarded and recreated from
//! the fetched feed inside a single database transaction. Bookings of other
//! sources are never touched, so syncing Airbnb cannot disturb Booking.com
//! rows or directly entered reservations.

use std::collections::HashMap;

use crate::{
    entities::{booking, Booking, BookingColumn, BookingSource, Property, PropertyColumn},
    errors::Result,
    feed::FeedEvent,
};
use sea_orm::{prelude::*, QueryFilter, QueryOrder, Set, TransactionTrait};
use serde::Serialize;

/// One row of the calendar view returned by `GET /bookings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Booking id
    pub id: i64,
    /// Display title: guest name and property name
    pub title: String,
    /// Check-in date
    pub start: DateTimeUtc,
    /// Check-out date
    pub end: DateTimeUtc,
    /// Property the booking belongs to
    pub property_id: i64,
    /// Lowercase display tag: `"airbnb"`, `"booking"`, or `"other"`
    pub source: &'static str,
}

/// Replaces all bookings of `source` for one property with rows derived from
/// `events`.
///
/// Delete and insert run inside one database transaction: either the previous
/// batch is fully replaced by the new one or nothing changes. An empty event
/// list is a valid input and leaves the property with zero bookings from that
/// source. Returns the number of bookings created.
pub async fn replace_source_bookings(
    db: &DatabaseConnection,
    property_id: i64,
    source: BookingSource,
    events: &[FeedEvent],
) -> Result<u64> {
    let txn = db.begin().await?;

    Booking::delete_many()
        .filter(BookingColumn::PropertyId.eq(property_id))
        .filter(BookingColumn::Source.eq(source))
        .exec(&txn)
        .await?;

    let mut created = 0u64;
    for event in events {
        let guest_name = event
            .summary
            .clone()
            .unwrap_or_else(|| source.default_guest_name().to_string());

        booking::ActiveModel {
            property_id: Set(property_id),
            start_date: Set(event.start),
            end_date: Set(event.end),
            guest_name: Set(guest_name),
            source: Set(source),
            external_id: Set(event.uid.clone()),
            amount: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        created += 1;
    }

    txn.commit().await?;
    Ok(created)
}

/// Lists calendar events for all properties owned by `user_id`, optionally
/// restricted to one property, ordered by start date ascending.
///
/// Booking sources are remapped to their lowercase display tags; anything
/// that is not an Airbnb or Booking.com import shows as `"other"`.
pub async fn list_calendar_events(
    db: &DatabaseConnection,
    user_id: &str,
    property_id: Option<i64>,
) -> Result<Vec<CalendarEvent>> {
    let mut query = Property::find().filter(PropertyColumn::UserId.eq(user_id));
    if let Some(id) = property_id {
        query = query.filter(PropertyColumn::Id.eq(id));
    }
    let properties = query.all(db).await?;

    let property_names: HashMap<i64, String> =
        properties.into_iter().map(|p| (p.id, p.name)).collect();
    let property_ids: Vec<i64> = property_names.keys().copied().collect();

    let bookings = Booking::find()
        .filter(BookingColumn::PropertyId.is_in(property_ids))
        .order_by_asc(BookingColumn::StartDate)
        .all(db)
        .await?;

    let events = bookings
        .into_iter()
        .map(|b| {
            let property_name = property_names
                .get(&b.property_id)
                .map_or("", String::as_str);
            let guest = if b.guest_name.is_empty() {
                "Reserva"
            } else {
                b.guest_name.as_str()
            };
            CalendarEvent {
                id: b.id,
                title: format!("{guest} - {property_name}"),
                start: b.start_date,
                end: b.end_date,
                property_id: b.property_id,
                source: b.source.display_tag(),
            }
        })
        .collect();

    Ok(events)
}
