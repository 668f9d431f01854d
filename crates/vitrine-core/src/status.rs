//! The event status engine.
//!
//! [`derive_status`] projects an [`Event`] plus a wall-clock instant onto a
//! [`DerivedStatus`]. The result is never cached: the answer changes as time
//! advances, so callers re-evaluate on every render or ranking pass.

use chrono::{DateTime, Utc};

use crate::countdown::days_until;
use crate::model::{Event, EventStatus};

/// Machine-readable bucket a status falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// Starts within 24 hours (covers both "today" and "tomorrow" labels).
    Today,
    Ongoing,
    Soon,
    Upcoming,
    Completed,
    Cancelled,
    Future,
}

impl StatusCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Ongoing => "ongoing",
            Self::Soon => "soon",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Future => "future",
        }
    }
}

/// Computed display status. A value type, cheap to recompute.
///
/// `priority` is the ranking key: lower is more urgent. An imminent event
/// (priority 0) ranks above even an ongoing one (priority 1) since it needs
/// maximum visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStatus {
    pub code: StatusCode,
    pub label: &'static str,
    pub priority: u8,
    pub pulsing: bool,
    pub glowing: bool,
}

impl DerivedStatus {
    const ONGOING: Self = Self {
        code: StatusCode::Ongoing,
        label: "Happening now",
        priority: 1,
        pulsing: true,
        glowing: true,
    };
    const COMPLETED: Self = Self {
        code: StatusCode::Completed,
        label: "Completed",
        priority: 4,
        pulsing: false,
        glowing: false,
    };
    const CANCELLED: Self = Self {
        code: StatusCode::Cancelled,
        label: "Cancelled",
        priority: 5,
        pulsing: false,
        glowing: false,
    };
    const FUTURE: Self = Self {
        code: StatusCode::Future,
        label: "Save the date",
        priority: 6,
        pulsing: false,
        glowing: false,
    };
}

/// Derives the display status for `event` as seen at `now`.
///
/// First match wins:
///
/// 1. An explicit non-default `event.status` is trusted verbatim, letting an
///    administrator override the time-based inference (e.g. cancel an event
///    whose dates haven't passed).
/// 2. Otherwise the dates decide: past the end is completed, past the start
///    is ongoing, and a future start is bucketed by how many days away it is.
///
/// An event whose start date never parsed can't be placed on the timeline
/// and falls through to the far-future bucket. An event without an end date
/// is never inferred completed; it stays ongoing once started.
#[must_use]
pub fn derive_status(event: &Event, now: DateTime<Utc>) -> DerivedStatus {
    match event.status {
        EventStatus::Ongoing => return DerivedStatus::ONGOING,
        EventStatus::Completed => return DerivedStatus::COMPLETED,
        EventStatus::Cancelled => return DerivedStatus::CANCELLED,
        EventStatus::Upcoming => {}
    }

    let Some(start) = event.start.parsed() else {
        return DerivedStatus::FUTURE;
    };
    let end = event.end.as_ref().and_then(super::model::EventDate::parsed);

    if end.is_some_and(|end| now > end) {
        return DerivedStatus::COMPLETED;
    }
    if now >= start {
        return DerivedStatus::ONGOING;
    }

    let days = days_until(start, now);
    if days <= 1 {
        DerivedStatus {
            code: StatusCode::Today,
            label: if days == 0 { "Today" } else { "Tomorrow" },
            priority: 0,
            pulsing: true,
            glowing: true,
        }
    } else if days <= 7 {
        DerivedStatus {
            code: StatusCode::Soon,
            label: "This week",
            priority: 2,
            pulsing: true,
            glowing: false,
        }
    } else if days <= 30 {
        DerivedStatus {
            code: StatusCode::Upcoming,
            label: "This month",
            priority: 3,
            pulsing: false,
            glowing: false,
        }
    } else {
        DerivedStatus::FUTURE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{EventDate, EventId};

    fn event(start: EventDate, end: Option<EventDate>, status: EventStatus) -> Event {
        Event {
            id: EventId::from("evt_1"),
            title: "Assemblée générale".into(),
            subtitle: None,
            description: "Annual general meeting.".into(),
            start,
            end,
            location: "Paris".into(),
            attendees: None,
            image_url: None,
            link: None,
            featured: false,
            status,
            published: true,
            gradient: None,
        }
    }

    fn at(now: DateTime<Utc>, offset: Duration) -> EventDate {
        EventDate::At(now + offset)
    }

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn starts_in_twelve_hours_is_today_priority_zero() {
        let now = test_now();
        let ev = event(at(now, Duration::hours(12)), None, EventStatus::Upcoming);
        let s = derive_status(&ev, now);
        assert_eq!(s.code, StatusCode::Today);
        assert_eq!(s.priority, 0);
        assert_eq!(s.label, "Tomorrow"); // ceil(12h / 24h) == 1
        assert!(s.pulsing && s.glowing);
    }

    #[test]
    fn between_start_and_end_is_ongoing() {
        let now = test_now();
        let ev = event(
            at(now, -Duration::hours(1)),
            Some(at(now, Duration::hours(1))),
            EventStatus::Upcoming,
        );
        let s = derive_status(&ev, now);
        assert_eq!(s.code, StatusCode::Ongoing);
        assert_eq!(s.priority, 1);
    }

    #[test]
    fn start_exactly_now_is_ongoing() {
        let now = test_now();
        let ev = event(EventDate::At(now), None, EventStatus::Upcoming);
        assert_eq!(derive_status(&ev, now).code, StatusCode::Ongoing);
    }

    #[test]
    fn past_end_is_completed() {
        let now = test_now();
        let ev = event(
            at(now, -Duration::days(3)),
            Some(at(now, -Duration::days(2))),
            EventStatus::Upcoming,
        );
        let s = derive_status(&ev, now);
        assert_eq!(s.code, StatusCode::Completed);
        assert_eq!(s.priority, 4);
    }

    #[test]
    fn no_end_date_never_inferred_completed() {
        let now = test_now();
        let ev = event(at(now, -Duration::days(400)), None, EventStatus::Upcoming);
        assert_eq!(derive_status(&ev, now).code, StatusCode::Ongoing);
    }

    #[test]
    fn explicit_cancelled_wins_over_dates() {
        let now = test_now();
        let ev = event(
            at(now, Duration::days(10)),
            Some(at(now, Duration::days(11))),
            EventStatus::Cancelled,
        );
        let s = derive_status(&ev, now);
        assert_eq!(s.code, StatusCode::Cancelled);
        assert_eq!(s.priority, 5);
    }

    #[test]
    fn explicit_ongoing_wins_over_future_dates() {
        let now = test_now();
        let ev = event(at(now, Duration::days(90)), None, EventStatus::Ongoing);
        assert_eq!(derive_status(&ev, now).code, StatusCode::Ongoing);
    }

    #[test]
    fn future_buckets_by_days_until() {
        let now = test_now();
        let soon = event(at(now, Duration::days(5)), None, EventStatus::Upcoming);
        assert_eq!(derive_status(&soon, now).code, StatusCode::Soon);
        assert_eq!(derive_status(&soon, now).priority, 2);

        let month = event(at(now, Duration::days(20)), None, EventStatus::Upcoming);
        assert_eq!(derive_status(&month, now).code, StatusCode::Upcoming);
        assert_eq!(derive_status(&month, now).priority, 3);

        let far = event(at(now, Duration::days(120)), None, EventStatus::Upcoming);
        assert_eq!(derive_status(&far, now).code, StatusCode::Future);
        assert_eq!(derive_status(&far, now).priority, 6);
    }

    #[test]
    fn unparsable_start_ranks_far_future() {
        let now = test_now();
        let ev = event(
            EventDate::Raw("Octobre 2026, date à confirmer".into()),
            None,
            EventStatus::Upcoming,
        );
        let s = derive_status(&ev, now);
        assert_eq!(s.code, StatusCode::Future);
        assert_eq!(s.priority, 6);
    }
}
