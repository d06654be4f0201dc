//! A module to parse iCal feed content into [`FeedEvent`]s.
//!
//! Only VEVENT components are considered. Events missing a DTSTART or DTEND
//! are skipped rather than rejected: rental feeds routinely carry non-event
//! entries (availability blocks, notes) that are not reservable spans.

use chrono::{NaiveDate, NaiveDateTime};
use ical::parser::ical::component::IcalEvent;

use crate::feed::{FeedError, FeedEvent};

/// Parses raw iCal text into the usable entries of the feed.
///
/// Empty input or input without any VCALENDAR component is a
/// [`FeedError::Parse`]. A syntactically valid calendar with zero usable
/// events yields an empty vector, which is a valid outcome.
pub fn parse_feed(content: &str) -> Result<Vec<FeedEvent>, FeedError> {
    if content.trim().is_empty() {
        return Err(FeedError::Parse("empty feed content".to_string()));
    }

    let reader = ical::IcalParser::new(content.as_bytes());
    let mut events = Vec::new();
    let mut saw_calendar = false;

    for calendar in reader {
        let calendar = calendar.map_err(|e| FeedError::Parse(e.to_string()))?;
        saw_calendar = true;
        for event in &calendar.events {
            if let Some(event) = convert_event(event) {
                events.push(event);
            }
        }
    }

    if !saw_calendar {
        return Err(FeedError::Parse("no calendar data found".to_string()));
    }

    Ok(events)
}

/// Converts one VEVENT into a [`FeedEvent`], or `None` when it does not
/// represent a reservable span.
fn convert_event(event: &IcalEvent) -> Option<FeedEvent> {
    let mut uid = None;
    let mut summary = None;
    let mut start = None;
    let mut end = None;

    for prop in &event.properties {
        match prop.name.as_str() {
            "UID" => uid = prop.value.clone(),
            "SUMMARY" => summary = prop.value.clone(),
            "DTSTART" => start = prop.value.as_deref().and_then(parse_ical_datetime),
            "DTEND" => end = prop.value.as_deref().and_then(parse_ical_datetime),
            _ => {}
        }
    }

    Some(FeedEvent {
        uid,
        summary,
        start: start?,
        end: end?,
    })
}

/// Parses the date forms rental feeds use: `YYYYMMDD` (all-day, midnight
/// UTC), `YYYYMMDDTHHMMSS`, and `YYYYMMDDTHHMMSSZ`. Naive timestamps are
/// treated as UTC.
fn parse_ical_datetime(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let value = value.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%SZ") {
        return Some(dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S") {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y%m%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::{TimeZone, Utc};

    const AIRBNB_STYLE_FEED: &str = "BEGIN:VCALENDAR\r\n\
PRODID:-//Airbnb Inc//Hosting Calendar 1.0//EN\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
DTSTAMP:20240301T120000Z\r\n\
DTSTART;VALUE=DATE:20240310\r\n\
DTEND;VALUE=DATE:20240315\r\n\
SUMMARY:Reserved - Ana García\r\n\
UID:abc123@airbnb.com\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
DTSTAMP:20240301T120000Z\r\n\
DTSTART;VALUE=DATE:20240320\r\n\
SUMMARY:Not available\r\n\
UID:def456@airbnb.com\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    const EMPTY_CALENDAR: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Booking.com//Calendar//EN\r\n\
END:VCALENDAR\r\n";

    #[test]
    fn test_parses_events_and_skips_incomplete_ones() {
        // The second VEVENT has no DTEND, so it is filtered, not an error
        let events = parse_feed(AIRBNB_STYLE_FEED).unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.uid.as_deref(), Some("abc123@airbnb.com"));
        assert_eq!(event.summary.as_deref(), Some("Reserved - Ana García"));
        assert_eq!(event.start, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(event.end, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_empty_calendar_yields_zero_events() {
        let events = parse_feed(EMPTY_CALENDAR).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_empty_content_is_parse_error() {
        let result = parse_feed("");
        assert!(matches!(result, Err(FeedError::Parse(_))));

        let result = parse_feed("   \n  ");
        assert!(matches!(result, Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_non_calendar_content_is_parse_error() {
        let result = parse_feed("<html><body>404 Not Found</body></html>");
        assert!(matches!(result, Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_datetime_forms() {
        let utc_stamp = parse_ical_datetime("20240310T140000Z").unwrap();
        assert_eq!(utc_stamp, Utc.with_ymd_and_hms(2024, 3, 10, 14, 0, 0).unwrap());

        let naive_stamp = parse_ical_datetime("20240310T140000").unwrap();
        assert_eq!(naive_stamp, utc_stamp);

        let date_only = parse_ical_datetime("20240310").unwrap();
        assert_eq!(date_only, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());

        assert!(parse_ical_datetime("not-a-date").is_none());
        assert!(parse_ical_datetime("").is_none());
    }
}
