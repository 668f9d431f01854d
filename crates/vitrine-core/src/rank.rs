//! Presentation ordering for event lists.

use std::cmp::Reverse;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::model::Event;
use crate::status::derive_status;

/// Sorts `events` in place into display order as seen at `now`:
/// featured first, then by derived status urgency, then chronologically.
///
/// Events whose start date never parsed sort after every dated event within
/// their bucket. The sort is stable, so ties keep their input order, and
/// re-ranking an already ranked list is a no-op.
pub fn rank_events(events: &mut [Arc<Event>], now: DateTime<Utc>) {
    events.sort_by_cached_key(|event| {
        let start = event
            .start
            .parsed()
            .map_or(i64::MAX, |dt| dt.timestamp());
        (
            Reverse(event.featured),
            derive_status(event, now).priority,
            start,
        )
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{EventDate, EventId, EventStatus};

    fn event(id: &str, start: EventDate, featured: bool, status: EventStatus) -> Arc<Event> {
        Arc::new(Event {
            id: EventId::from(id),
            title: id.to_owned(),
            subtitle: None,
            description: "desc".into(),
            start,
            end: None,
            location: "Lyon".into(),
            attendees: None,
            image_url: None,
            link: None,
            featured,
            status,
            published: true,
            gradient: None,
        })
    }

    fn ids(events: &[Arc<Event>]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn featured_beats_urgency() {
        let n = now();
        let mut events = vec![
            event(
                "imminent",
                EventDate::At(n + Duration::hours(6)),
                false,
                EventStatus::Upcoming,
            ),
            event(
                "featured-far",
                EventDate::At(n + Duration::days(200)),
                true,
                EventStatus::Upcoming,
            ),
        ];
        rank_events(&mut events, n);
        assert_eq!(ids(&events), ["featured-far", "imminent"]);
    }

    #[test]
    fn within_featured_tier_urgency_then_date() {
        let n = now();
        let mut events = vec![
            event("far", EventDate::At(n + Duration::days(90)), false, EventStatus::Upcoming),
            event("later-soon", EventDate::At(n + Duration::days(6)), false, EventStatus::Upcoming),
            event("soon", EventDate::At(n + Duration::days(4)), false, EventStatus::Upcoming),
            event("ongoing", EventDate::At(n - Duration::hours(1)), false, EventStatus::Upcoming),
        ];
        rank_events(&mut events, n);
        assert_eq!(ids(&events), ["ongoing", "soon", "later-soon", "far"]);
    }

    #[test]
    fn ties_preserve_input_order() {
        let n = now();
        let start = EventDate::At(n + Duration::days(100));
        let mut events = vec![
            event("a", start.clone(), false, EventStatus::Upcoming),
            event("b", start.clone(), false, EventStatus::Upcoming),
            event("c", start, false, EventStatus::Upcoming),
        ];
        rank_events(&mut events, n);
        assert_eq!(ids(&events), ["a", "b", "c"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let n = now();
        let mut events = vec![
            event("x", EventDate::At(n + Duration::days(40)), false, EventStatus::Upcoming),
            event("y", EventDate::At(n + Duration::days(2)), true, EventStatus::Upcoming),
            event("z", EventDate::Raw("sometime".into()), false, EventStatus::Upcoming),
        ];
        rank_events(&mut events, n);
        let first = ids(&events).into_iter().map(str::to_owned).collect::<Vec<_>>();
        rank_events(&mut events, n);
        assert_eq!(ids(&events), first);
    }

    #[test]
    fn raw_dates_sort_after_dated_events_in_same_bucket() {
        let n = now();
        let mut events = vec![
            event("undated", EventDate::Raw("TBD".into()), false, EventStatus::Upcoming),
            event("dated-far", EventDate::At(n + Duration::days(60)), false, EventStatus::Upcoming),
        ];
        rank_events(&mut events, n);
        assert_eq!(ids(&events), ["dated-far", "undated"]);
    }

    #[test]
    fn cancelled_sinks_even_when_featured_among_featured() {
        let n = now();
        let mut events = vec![
            event(
                "featured-cancelled",
                EventDate::At(n + Duration::days(3)),
                true,
                EventStatus::Cancelled,
            ),
            event(
                "featured-live",
                EventDate::At(n + Duration::days(300)),
                true,
                EventStatus::Upcoming,
            ),
        ];
        rank_events(&mut events, n);
        assert_eq!(ids(&events), ["featured-live", "featured-cancelled"]);
    }
}
