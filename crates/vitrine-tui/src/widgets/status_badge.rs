//! Status badge — the derived-status pill shown on cards and table rows.

use chrono::{DateTime, Utc};
use ratatui::text::Span;
use vitrine_core::{Event, derive_status, format_countdown};

use crate::theme;

/// Badge span for an event's current status, e.g. `● Tomorrow`.
pub fn badge(event: &Event, now: DateTime<Utc>) -> Span<'static> {
    let status = derive_status(event, now);
    let marker = if status.pulsing { "●" } else { "○" };
    Span::styled(
        format!("{marker} {}", status.label),
        theme::status_style(&status),
    )
}

/// Countdown span, when the event hasn't started yet: `⏱ 2d 4h`.
pub fn countdown(event: &Event, now: DateTime<Utc>) -> Option<Span<'static>> {
    let start = event.start.parsed()?;
    let remaining = format_countdown(start, now)?;
    Some(Span::styled(
        format!("⏱ {remaining}"),
        theme::key_hint_key(),
    ))
}
