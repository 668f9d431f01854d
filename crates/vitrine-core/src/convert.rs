//! Wire record → domain conversion.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;
use vitrine_api::EventRecord;

use crate::model::{Event, EventDate, EventId, EventStatus};

/// Parses a backend date string. RFC 3339 first, then a bare `YYYY-MM-DD`
/// (taken as midnight UTC, which is how the admin form stores all-day
/// events). Anything else is kept verbatim.
fn parse_date(raw: &str) -> EventDate {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return EventDate::At(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return EventDate::At(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc());
    }
    EventDate::Raw(raw.to_owned())
}

/// Converts one wire record into a domain [`Event`].
///
/// Never fails: malformed dates are kept as raw strings (and logged), an
/// unrecognized status string falls back to the default. A bad row degrades
/// in place instead of sinking the whole feed.
#[must_use]
pub fn event_from_record(record: EventRecord) -> Event {
    let start = parse_date(&record.start_date);
    if matches!(start, EventDate::Raw(_)) {
        warn!(id = %record.id, date = %record.start_date, "unparsable start date, keeping raw");
    }
    let end = record.end_date.as_deref().map(|raw| {
        let date = parse_date(raw);
        if matches!(date, EventDate::Raw(_)) {
            warn!(id = %record.id, date = raw, "unparsable end date, keeping raw");
        }
        date
    });

    let status = EventStatus::from_str(&record.status).unwrap_or_else(|_| {
        warn!(id = %record.id, status = %record.status, "unknown status, treating as upcoming");
        EventStatus::default()
    });

    Event {
        id: EventId::from(record.id),
        title: record.title,
        subtitle: record.subtitle,
        description: record.description,
        start,
        end,
        location: record.location,
        attendees: record.attendees,
        image_url: record.image_url,
        link: record.link,
        featured: record.featured,
        status,
        published: record.published,
        gradient: record.gradient,
    }
}

/// Converts a whole fetch result, wrapping each event in an [`Arc`] so the
/// feed can hand out cheap clones to every screen.
#[must_use]
pub fn events_from_records(records: Vec<EventRecord>) -> Vec<Arc<Event>> {
    records
        .into_iter()
        .map(|record| Arc::new(event_from_record(record)))
        .collect()
}
