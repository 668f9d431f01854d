//! `vitrine next` — the single next event on the calendar.

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Utc;
use vitrine_api::SiteClient;
use vitrine_core::{Event, derive_status, events_from_records, format_countdown, rank_events};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Picks the next event that hasn't finished: ranked order, skipping
/// completed and cancelled entries. Featured events win ties the same way
/// they do on the site.
fn pick_next(events: &[Arc<Event>]) -> Option<&Arc<Event>> {
    let now = Utc::now();
    events.iter().find(|event| {
        !matches!(
            derive_status(event, now).code,
            vitrine_core::StatusCode::Completed | vitrine_core::StatusCode::Cancelled
        )
    })
}

fn detail(event: &Event) -> String {
    let now = Utc::now();
    let status = derive_status(event, now);
    let mut out = String::new();
    let _ = writeln!(out, "{}", event.title);
    let _ = writeln!(out, "Status:    {}", status.label);
    let _ = writeln!(out, "Starts:    {}", event.start);
    if let Some(countdown) = event
        .start
        .parsed()
        .and_then(|start| format_countdown(start, now))
    {
        let _ = writeln!(out, "Countdown: {countdown}");
    }
    let _ = write!(out, "Location:  {}", event.location);
    out
}

pub async fn handle(client: &SiteClient, global: &GlobalOpts) -> Result<(), CliError> {
    let records = client.list_events(false).await?;
    let mut events = events_from_records(records);
    rank_events(&mut events, Utc::now());

    match pick_next(&events) {
        Some(event) => {
            let out = output::render_event(&global.output, event, &detail(event));
            output::print_output(&out, global.quiet);
        }
        None => {
            if !global.quiet {
                eprintln!("Nothing scheduled.");
            }
        }
    }
    Ok(())
}
