//! Canonical domain types.

mod event;

pub use event::{Event, EventDate, EventId, EventStatus};
