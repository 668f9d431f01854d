//! Async HTTP client for an association's public events API.
//!
//! The backend is a small JSON REST surface:
//!
//! - `GET /api/events` — published events, ordered featured-first then by
//!   start date. With `?includeUnpublished=true` (admin bearer token) the
//!   full set is returned, drafts included.
//! - `GET /api/events/{id}` — a single event.
//!
//! This crate speaks the wire format only ([`EventRecord`] keeps dates as
//! the raw strings the backend sends); interpretation — date parsing,
//! status derivation, ranking — belongs to `vitrine-core`.

mod client;
mod error;
mod records;

pub use client::{SiteClient, SiteClientBuilder};
pub use error::Error;
pub use records::EventRecord;
