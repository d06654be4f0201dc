//! Calendar feed module - fetching and parsing of external iCal feeds.
//!
//! A feed is identified by a URL and yields a sequence of [`FeedEvent`]s.
//! Fetch and parse failures are reported as a single [`FeedError`] per feed;
//! retry policy is the caller's decision and no retries happen here. Entries
//! that do not represent a reservable time span (missing start or end) are
//! filtered during parsing, not errors.

pub mod fetcher;
pub mod parser;

pub use fetcher::HttpCalendarFeed;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// One usable calendar entry from a feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedEvent {
    /// Unique identifier of the event within the feed (iCal UID)
    pub uid: Option<String>,
    /// Human-readable title (iCal SUMMARY), usually the guest name
    pub summary: Option<String>,
    /// Start of the reserved span (UTC)
    pub start: DateTime<Utc>,
    /// End of the reserved span (UTC)
    pub end: DateTime<Utc>,
}

/// Failure to obtain usable entries from one feed.
///
/// These are recovered per source during a sync run and reported as data in
/// the sync report; they never escalate to a request-level failure.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network failure, timeout, or non-success HTTP status
    #[error("feed request failed: {0}")]
    Unavailable(String),
    /// Malformed or empty feed content
    #[error("invalid calendar content: {0}")]
    Parse(String),
}

/// A source of calendar entries, keyed by feed URL.
///
/// Object-safe so the sync orchestrator can run against the HTTP
/// implementation in production and an in-memory one in tests.
#[async_trait]
pub trait CalendarFeed: Send + Sync {
    /// Retrieves and parses the feed at `url` into usable entries.
    async fn fetch(&self, url: &str) -> Result<Vec<FeedEvent>, FeedError>;
}
