//! Small reusable render helpers.

pub mod dots;
pub mod status_badge;
