//! Event command handlers.

use std::fmt::Write as _;

use chrono::Utc;
use tracing::debug;
use vitrine_api::SiteClient;
use vitrine_core::status::StatusCode;
use vitrine_core::{Event, derive_status, event_from_record, events_from_records, rank_events};

use crate::cli::{EventsArgs, EventsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Detail view ─────────────────────────────────────────────────────

fn detail(event: &Event, warnings: &[String]) -> String {
    let now = Utc::now();
    let status = derive_status(event, now);
    let mut out = String::new();

    let _ = writeln!(out, "{}", event.title);
    if let Some(subtitle) = &event.subtitle {
        let _ = writeln!(out, "{subtitle}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Status:    {}", status.label);
    let _ = writeln!(out, "Starts:    {}", event.start);
    if let Some(end) = &event.end {
        let _ = writeln!(out, "Ends:      {end}");
    }
    if let Some(countdown) = event
        .start
        .parsed()
        .and_then(|start| vitrine_core::format_countdown(start, now))
    {
        let _ = writeln!(out, "Countdown: {countdown}");
    }
    let _ = writeln!(out, "Location:  {}", event.location);
    if let Some(attendees) = &event.attendees {
        let _ = writeln!(out, "Attendees: {attendees}");
    }
    if let Some(link) = &event.link {
        let _ = writeln!(out, "Link:      {link}");
    }
    if !event.published {
        let _ = writeln!(out, "Published: no (draft)");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", event.description);

    if !warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Content checks:");
        for warning in warnings {
            let _ = writeln!(out, "  - {warning}");
        }
    }
    out.trim_end().to_owned()
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &SiteClient,
    args: EventsArgs,
    global: &GlobalOpts,
    has_token: bool,
) -> Result<(), CliError> {
    match args.command {
        EventsCommand::List { all, status, featured } => {
            if all && !has_token {
                return Err(CliError::Validation {
                    field: "all".into(),
                    reason: "listing unpublished events requires a token (--token or VITRINE_TOKEN)"
                        .into(),
                });
            }
            let wanted = status
                .as_deref()
                .map(parse_status_filter)
                .transpose()?;

            let records = client.list_events(all).await?;
            debug!(count = records.len(), all, "fetched event list");
            let mut events = events_from_records(records);
            let now = Utc::now();
            rank_events(&mut events, now);

            events.retain(|event| {
                (!featured || event.featured)
                    && wanted.is_none_or(|code| derive_status(event, now).code == code)
            });

            let color = output::should_color(&global.color);
            let out = output::render_events(&global.output, &events, color);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EventsCommand::Get { id, check } => {
            let record = client.get_event(&id).await?;
            let event = event_from_record(record);
            let warnings = if check {
                vitrine_core::validate::content_warnings(&event)
            } else {
                Vec::new()
            };
            let out = output::render_event(&global.output, &event, &detail(&event, &warnings));
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

fn parse_status_filter(raw: &str) -> Result<StatusCode, CliError> {
    let code = match raw {
        "today" => StatusCode::Today,
        "ongoing" => StatusCode::Ongoing,
        "soon" => StatusCode::Soon,
        "upcoming" => StatusCode::Upcoming,
        "completed" => StatusCode::Completed,
        "cancelled" => StatusCode::Cancelled,
        "future" => StatusCode::Future,
        other => {
            return Err(CliError::Validation {
                field: "status".into(),
                reason: format!(
                    "unknown status '{other}' (expected today, ongoing, soon, upcoming, completed, cancelled, or future)"
                ),
            });
        }
    };
    Ok(code)
}
