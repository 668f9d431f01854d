//! Event rendering for the selected `--output` format.
//!
//! This binary only ever prints two things: a ranked event list and a
//! single event's detail block. Table mode colors the derived status the
//! way the site's badges do; plain mode emits bare event ids for piping
//! into other tools.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use chrono::Utc;
use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};
use vitrine_core::{Event, StatusCode, derive_status};

use crate::cli::{ColorMode, OutputFormat};

/// Whether table cells get color codes. `auto` requires an interactive
/// stdout and no `NO_COLOR` in the environment.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Event list ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Featured")]
    featured: String,
}

fn status_cell(event: &Event, color: bool) -> String {
    let status = derive_status(event, Utc::now());
    if !color {
        return status.label.to_owned();
    }
    match status.code {
        StatusCode::Today | StatusCode::Ongoing => status.label.bright_green().bold().to_string(),
        StatusCode::Soon => status.label.yellow().to_string(),
        StatusCode::Upcoming => status.label.cyan().to_string(),
        StatusCode::Cancelled => status.label.red().to_string(),
        StatusCode::Completed | StatusCode::Future => status.label.dimmed().to_string(),
    }
}

fn event_row(event: &Event, color: bool) -> EventRow {
    EventRow {
        id: event.id.to_string(),
        title: event.title.clone(),
        when: event.start.to_string(),
        status: status_cell(event, color),
        location: event.location.clone(),
        featured: if event.featured { "★".into() } else { String::new() },
    }
}

/// Renders a ranked event list. The caller has already sorted and
/// filtered; order is preserved as given.
pub fn render_events(format: &OutputFormat, events: &[Arc<Event>], color: bool) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<EventRow> = events.iter().map(|e| event_row(e, color)).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => json(events, false),
        OutputFormat::JsonCompact => json(events, true),
        OutputFormat::Yaml => yaml(events),
        OutputFormat::Plain => events
            .iter()
            .map(|e| e.id.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

// ── Single event ────────────────────────────────────────────────────

/// Renders one event. Table mode prints the caller's preformatted detail
/// block; plain mode prints just the id.
pub fn render_event(format: &OutputFormat, event: &Event, detail: &str) -> String {
    match format {
        OutputFormat::Table => detail.to_owned(),
        OutputFormat::Json => json(event, false),
        OutputFormat::JsonCompact => json(event, true),
        OutputFormat::Yaml => yaml(event),
        OutputFormat::Plain => event.id.to_string(),
    }
}

/// Writes to stdout unless quiet mode swallows it.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Serde backends ──────────────────────────────────────────────────

fn json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let result = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    result.unwrap_or_else(|err| format!("{{\"error\": \"serialization failed: {err}\"}}"))
}

fn yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).unwrap_or_else(|err| format!("error: serialization failed: {err}"))
}
