//! Countdown helpers shared by the status engine and both frontends.

use chrono::{DateTime, Utc};

const SECS_PER_DAY: i64 = 86_400;

/// Whole days until `start`, rounded up.
///
/// An event starting in 12 hours is 1 day away; one starting this very
/// second is 0 days away. Negative when `start` is in the past.
#[must_use]
pub fn days_until(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let secs = (start - now).num_seconds();
    secs.div_euclid(SECS_PER_DAY) + i64::from(secs.rem_euclid(SECS_PER_DAY) != 0)
}

/// Compact human countdown to `start`, e.g. `"2d 4h"`, `"3h 10m"`, `"45m"`.
///
/// Returns `None` once `start` has passed; the caller switches to the
/// ongoing/completed presentation instead.
#[must_use]
pub fn format_countdown(start: DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    let remaining = (start - now).num_seconds();
    if remaining <= 0 {
        return None;
    }

    let days = remaining / SECS_PER_DAY;
    let hours = (remaining % SECS_PER_DAY) / 3_600;
    let minutes = (remaining % 3_600) / 60;

    Some(if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{}m", minutes.max(1))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn days_until_rounds_up() {
        let n = now();
        assert_eq!(days_until(n + Duration::hours(12), n), 1);
        assert_eq!(days_until(n + Duration::hours(25), n), 2);
        assert_eq!(days_until(n, n), 0);
        assert_eq!(days_until(n - Duration::hours(30), n), -1);
    }

    #[test]
    fn countdown_picks_largest_two_units() {
        let n = now();
        assert_eq!(
            format_countdown(n + Duration::days(2) + Duration::hours(4), n).unwrap(),
            "2d 4h"
        );
        assert_eq!(
            format_countdown(n + Duration::hours(3) + Duration::minutes(10), n).unwrap(),
            "3h 10m"
        );
        assert_eq!(format_countdown(n + Duration::minutes(45), n).unwrap(), "45m");
    }

    #[test]
    fn countdown_floors_at_one_minute() {
        let n = now();
        assert_eq!(format_countdown(n + Duration::seconds(20), n).unwrap(), "1m");
    }

    #[test]
    fn countdown_none_once_started() {
        let n = now();
        assert_eq!(format_countdown(n, n), None);
        assert_eq!(format_countdown(n - Duration::minutes(5), n), None);
    }
}
