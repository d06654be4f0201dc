//! Shared test utilities for `Casaflow`.
//!
//! This module provides common helper functions for setting up test databases,
//! creating test entities with sensible defaults, and mocking calendar feeds.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, Set};

use crate::{
    core::property,
    entities::{self, booking, BookingSource},
    errors::Result,
    feed::{CalendarFeed, FeedError, FeedEvent},
};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Parses a `YYYYMMDD` date string into a UTC midnight timestamp.
///
/// # Panics
/// Panics on malformed input; only use with literal test dates.
#[allow(clippy::unwrap_used)]
pub fn test_date(date: &str) -> chrono::DateTime<chrono::Utc> {
    NaiveDate::parse_from_str(date, "%Y%m%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Creates a test property with sensible defaults and no feed URLs.
pub async fn create_test_property(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
) -> Result<entities::property::Model> {
    create_property_with_feeds_named(db, user_id, name, None, None).await
}

/// Creates a test property named "Piso Centro" with the given feed URLs.
pub async fn create_property_with_feeds(
    db: &DatabaseConnection,
    user_id: &str,
    airbnb_ical_url: Option<&str>,
    booking_ical_url: Option<&str>,
) -> Result<entities::property::Model> {
    create_property_with_feeds_named(db, user_id, "Piso Centro", airbnb_ical_url, booking_ical_url)
        .await
}

async fn create_property_with_feeds_named(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
    airbnb_ical_url: Option<&str>,
    booking_ical_url: Option<&str>,
) -> Result<entities::property::Model> {
    property::create_property(
        db,
        user_id,
        property::NewProperty {
            name: name.to_string(),
            address: "Calle Mayor 1, Madrid".to_string(),
            description: None,
            airbnb_url: None,
            booking_url: None,
            airbnb_ical_url: airbnb_ical_url.map(ToString::to_string),
            booking_ical_url: booking_ical_url.map(ToString::to_string),
        },
    )
    .await
}

/// Creates a test booking directly in the store.
///
/// Dates are `YYYYMMDD` strings; the guest name defaults to the source
/// placeholder.
pub async fn create_test_booking(
    db: &DatabaseConnection,
    property_id: i64,
    source: BookingSource,
    start: &str,
    end: &str,
) -> Result<entities::booking::Model> {
    use sea_orm::ActiveModelTrait;

    booking::ActiveModel {
        property_id: Set(property_id),
        start_date: Set(test_date(start)),
        end_date: Set(test_date(end)),
        guest_name: Set(source.default_guest_name().to_string()),
        source: Set(source),
        external_id: Set(None),
        amount: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a test expense directly in the store with sensible defaults.
pub async fn create_test_expense(
    db: &DatabaseConnection,
    user_id: &str,
    property_id: i64,
    amount: f64,
) -> Result<entities::expense::Model> {
    use sea_orm::ActiveModelTrait;

    entities::expense::ActiveModel {
        property_id: Set(property_id),
        user_id: Set(user_id.to_string()),
        amount: Set(amount),
        date: Set(chrono::Utc::now()),
        description: Set("Test expense".to_string()),
        category: Set("suministros".to_string()),
        provider: Set(None),
        receipt_url: Set(None),
        transaction_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Builds a [`FeedEvent`] from `YYYYMMDD` date strings.
pub fn feed_event(uid: &str, summary: Option<&str>, start: &str, end: &str) -> FeedEvent {
    FeedEvent {
        uid: Some(uid.to_string()),
        summary: summary.map(ToString::to_string),
        start: test_date(start),
        end: test_date(end),
    }
}

/// Canned response for one mocked feed URL.
enum MockFeedResponse {
    Events(Vec<FeedEvent>),
    Unavailable(String),
}

/// In-memory [`CalendarFeed`] keyed by URL.
///
/// URLs without a configured response behave as unreachable feeds.
#[derive(Default)]
pub struct MockCalendarFeed {
    responses: HashMap<String, MockFeedResponse>,
}

impl MockCalendarFeed {
    /// Creates a mock feed with no configured URLs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures `url` to yield `events`.
    #[must_use]
    pub fn with_events(mut self, url: &str, events: Vec<FeedEvent>) -> Self {
        self.responses
            .insert(url.to_string(), MockFeedResponse::Events(events));
        self
    }

    /// Configures `url` to fail with an unavailable-source error.
    #[must_use]
    pub fn with_failure(mut self, url: &str, message: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            MockFeedResponse::Unavailable(message.to_string()),
        );
        self
    }
}

#[async_trait]
impl CalendarFeed for MockCalendarFeed {
    async fn fetch(&self, url: &str) -> std::result::Result<Vec<FeedEvent>, FeedError> {
        match self.responses.get(url) {
            Some(MockFeedResponse::Events(events)) => Ok(events.clone()),
            Some(MockFeedResponse::Unavailable(message)) => {
                Err(FeedError::Unavailable(message.clone()))
            }
            None => Err(FeedError::Unavailable(format!(
                "no mock response configured for {url}"
            ))),
        }
    }
}
