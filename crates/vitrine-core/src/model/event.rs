// ── Event domain types ──

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::EnumString;

/// Opaque, stable event identifier assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author-set status hint stored on the event row.
///
/// `Upcoming` is the default and means "infer from the dates"; any other
/// value is an explicit administrator override that the status engine
/// trusts verbatim (e.g. cancelling an event whose dates haven't passed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

/// A timestamp that may have failed to parse.
///
/// The backend promises ISO 8601, but historical rows carry free-form text.
/// Rather than dropping such an event (or crashing a ranking pass), the raw
/// string is retained for display and the event ranks as far-future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDate {
    At(DateTime<Utc>),
    Raw(String),
}

impl EventDate {
    /// The parsed instant, if parsing succeeded.
    pub fn parsed(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(dt) => Some(*dt),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(dt) => write!(f, "{}", dt.format("%a %d %b %Y, %H:%M UTC")),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

impl Serialize for EventDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::At(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Self::Raw(s) => serializer.serialize_str(s),
        }
    }
}

/// The canonical event. Read-only projection of a backend row; the status
/// engine and ranking never mutate it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,

    #[serde(rename = "startDate")]
    pub start: EventDate,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end: Option<EventDate>,

    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    pub featured: bool,
    pub status: EventStatus,
    pub published: bool,

    /// Gradient preset chosen in the admin UI; mapped to terminal colors
    /// by the TUI theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn status_parses_wire_spelling() {
        assert_eq!(EventStatus::from_str("UPCOMING").unwrap(), EventStatus::Upcoming);
        assert_eq!(EventStatus::from_str("CANCELLED").unwrap(), EventStatus::Cancelled);
        assert!(EventStatus::from_str("POSTPONED").is_err());
    }

    #[test]
    fn raw_date_displays_verbatim() {
        let date = EventDate::Raw("October 14-16, 2025".into());
        assert_eq!(date.to_string(), "October 14-16, 2025");
        assert_eq!(date.parsed(), None);
    }

    #[test]
    fn parsed_date_serializes_as_rfc3339() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap();
        let json = serde_json::to_string(&EventDate::At(dt)).unwrap();
        assert_eq!(json, "\"2026-10-14T09:00:00+00:00\"");
    }
}
