//! Domain layer between `vitrine-api` and UI consumers (CLI / TUI).
//!
//! This crate owns the event model and the presentation logic that both
//! frontends share:
//!
//! - **[`model`]** — canonical [`Event`] type converted from wire records.
//!   Dates that fail to parse are kept as their raw strings rather than
//!   dropping the event ([`model::EventDate`]).
//!
//! - **[`status`]** — [`derive_status`]: computes an event's display status
//!   from its dates and the author's explicit status hint, against an
//!   injected `now`. Pure; recomputed on every evaluation since the answer
//!   changes as wall-clock time advances.
//!
//! - **[`rank`]** — [`rank_events`]: stable featured-first / most-urgent /
//!   chronological ordering for presentation.
//!
//! - **[`carousel`]** — [`Carousel`]: the spotlight slideshow state machine.
//!   Owns its auto-advance deadline as an explicit value so the timer can
//!   never outlive or detach from the widget driving it.
//!
//! - **[`feed`]** — [`EventFeed`]: fetch-state holder (`loading` / `ready` /
//!   `failed`) over a `tokio::sync::watch` channel, in front of
//!   [`vitrine_api::SiteClient`].

pub mod carousel;
pub mod convert;
pub mod countdown;
pub mod feed;
pub mod model;
pub mod rank;
pub mod status;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use carousel::{Carousel, CarouselView, DEFAULT_ADVANCE_INTERVAL};
pub use convert::{event_from_record, events_from_records};
pub use countdown::{days_until, format_countdown};
pub use feed::{EventFeed, FeedState};
pub use model::{Event, EventDate, EventId, EventStatus};
pub use rank::rank_events;
pub use status::{DerivedStatus, StatusCode, derive_status};
