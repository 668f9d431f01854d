//! Data bridge — connects the [`EventFeed`] watch channel to TUI actions.
//!
//! Runs as a background task: kicks off the initial fetch, then forwards
//! every feed state change as an [`Action`] through the TUI's action
//! channel. Shuts down cleanly on cancellation, so no update can fire
//! against a torn-down app.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use vitrine_core::EventFeed;

use crate::action::Action;

/// Forwards feed states to the TUI as actions until cancelled. Runs the
/// initial fetch itself; callers spawn this as a task.
pub async fn run_data_bridge(
    feed: Arc<EventFeed>,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let mut rx = feed.subscribe();

    // Push the current state so screens render something immediately,
    // then fetch.
    let _ = action_tx.send(Action::FeedUpdated(rx.borrow_and_update().clone()));

    tokio::select! {
        () = cancel.cancelled() => return,
        () = feed.refresh() => {}
    }

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                let _ = action_tx.send(Action::FeedUpdated(state));
            }
        }
    }

    debug!("data bridge shut down");
}
