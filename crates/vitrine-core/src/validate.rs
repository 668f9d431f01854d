//! Advisory field checks mirroring the backend's write-side validation.
//!
//! The read path never rejects an event over these, but the CLI surfaces
//! them when inspecting a record so a content manager can spot rows that
//! would fail the admin form on next edit.

use crate::model::Event;

pub const TITLE_MAX: usize = 200;
pub const SUBTITLE_MAX: usize = 300;
pub const DESCRIPTION_MIN: usize = 10;
pub const LOCATION_MAX: usize = 200;
pub const ATTENDEES_MAX: usize = 100;

/// Returns human-readable problems with `event`'s content fields. Empty
/// means the record would pass backend validation as-is.
#[must_use]
pub fn content_warnings(event: &Event) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut check_max = |field: &str, value: &str, max: usize| {
        if value.chars().count() > max {
            warnings.push(format!("{field} exceeds {max} characters"));
        }
    };

    check_max("title", &event.title, TITLE_MAX);
    if let Some(subtitle) = &event.subtitle {
        check_max("subtitle", subtitle, SUBTITLE_MAX);
    }
    check_max("location", &event.location, LOCATION_MAX);
    if let Some(attendees) = &event.attendees {
        check_max("attendees", attendees, ATTENDEES_MAX);
    }
    if event.description.chars().count() < DESCRIPTION_MIN {
        warnings.push(format!("description shorter than {DESCRIPTION_MIN} characters"));
    }
    warnings
}
