//! Command handlers.

pub mod config_cmd;
pub mod events;
pub mod next;
