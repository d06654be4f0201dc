//! HTTP implementation of [`CalendarFeed`] backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::{Error, Result};
use crate::feed::{parser, CalendarFeed, FeedError, FeedEvent};

/// Fetches iCal feeds over HTTP with a bounded request duration.
pub struct HttpCalendarFeed {
    client: reqwest::Client,
}

impl HttpCalendarFeed {
    /// Builds a fetcher whose requests are aborted after `timeout`.
    ///
    /// The timeout covers the whole request including reading the body, so a
    /// stalled feed server cannot hold a sync request open indefinitely.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CalendarFeed for HttpCalendarFeed {
    async fn fetch(&self, url: &str) -> std::result::Result<Vec<FeedEvent>, FeedError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Unavailable(format!("HTTP status {status}")));
        }

        // Read the whole body before parsing: a truncated transfer must
        // surface here as a fetch failure, never as a half-parsed feed that
        // goes on to replace stored bookings.
        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        parser::parse_feed(&body)
    }
}
