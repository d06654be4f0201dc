//! Sync orchestration - Runs the booking synchronizer once per feed source.
//!
//! For a given property the orchestrator tries each of the two supported
//! sources (Airbnb and Booking.com) independently: a fetch or parse failure
//! on one source is captured in that source's report entry and never
//! prevents the other source from running. The aggregate report always
//! carries an entry for both sources; sources without a configured feed URL
//! get a skipped outcome.
//!
//! Feed content is fetched and parsed completely *before* any stored booking
//! is deleted, and delete+insert share one database transaction, so a failed
//! or truncated download can never wipe real bookings.

use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    core::{booking, property},
    entities::BookingSource,
    errors::Result,
    feed::{CalendarFeed, FeedError},
};

/// Outcome of synchronizing one feed source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    /// Whether bookings were imported from this source
    pub success: bool,
    /// Number of bookings created
    pub bookings: u64,
    /// Human-readable outcome, shown verbatim in the dashboard
    pub message: String,
}

impl SourceReport {
    /// Outcome for a source with no configured feed URL.
    fn skipped(source: BookingSource) -> Self {
        Self {
            success: false,
            bookings: 0,
            message: format!("No hay URL de iCal para {}", source.label()),
        }
    }

    /// Outcome for a fetch or parse failure.
    fn failed(source: BookingSource, err: &FeedError) -> Self {
        Self {
            success: false,
            bookings: 0,
            message: format!("Error al sincronizar con {}: {err}", source.label()),
        }
    }

    /// Outcome for a completed replacement sync.
    fn imported(bookings: u64) -> Self {
        Self {
            success: true,
            bookings,
            message: format!("{bookings} reservas importadas correctamente"),
        }
    }
}

/// Aggregate sync report for one property, one entry per supported source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Outcome for the Airbnb feed
    pub airbnb: SourceReport,
    /// Outcome for the Booking.com feed
    pub booking: SourceReport,
}

/// Synchronizes all configured feed sources of one property.
///
/// Fails with [`crate::errors::Error::PropertyNotFound`] when the property
/// does not exist or belongs to a different user. Per-source feed failures
/// are reported as data inside the returned report; datastore failures
/// propagate.
pub async fn sync_property(
    db: &DatabaseConnection,
    feed: &dyn CalendarFeed,
    user_id: &str,
    property_id: i64,
) -> Result<SyncReport> {
    let prop = property::find_owned(db, user_id, property_id).await?;

    let airbnb = sync_source(
        db,
        feed,
        property_id,
        BookingSource::Airbnb,
        prop.airbnb_ical_url.as_deref(),
    )
    .await?;

    let booking = sync_source(
        db,
        feed,
        property_id,
        BookingSource::Booking,
        prop.booking_ical_url.as_deref(),
    )
    .await?;

    Ok(SyncReport { airbnb, booking })
}

/// Runs the replace-sync for one source, turning feed failures into report
/// entries.
async fn sync_source(
    db: &DatabaseConnection,
    feed: &dyn CalendarFeed,
    property_id: i64,
    source: BookingSource,
    url: Option<&str>,
) -> Result<SourceReport> {
    let Some(url) = url else {
        return Ok(SourceReport::skipped(source));
    };

    // Fetch completes (or fails) before any stored row is touched
    let events = match feed.fetch(url).await {
        Ok(events) => events,
        Err(err) => {
            warn!(property_id, source = source.label(), error = %err, "feed sync failed");
            return Ok(SourceReport::failed(source, &err));
        }
    };

    let count = booking::replace_source_bookings(db, property_id, source, &events).await?;
    info!(property_id, source = source.label(), count, "feed sync completed");
    Ok(SourceReport::imported(count))
}
