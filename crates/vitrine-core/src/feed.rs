//! Fetch-state holder for the event list.
//!
//! [`EventFeed`] sits in front of [`SiteClient`] and publishes one of three
//! states over a `tokio::sync::watch` channel: loading, ready (possibly
//! empty), or failed with a user-presentable message. A failure never leaves
//! a partial list behind, and there is no automatic retry — refreshing is
//! always an explicit caller action.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};
use vitrine_api::SiteClient;

use crate::convert::events_from_records;
use crate::model::Event;

/// Current state of the event fetch.
#[derive(Debug, Clone, Default)]
pub enum FeedState {
    /// A fetch is in flight and no result has ever arrived.
    #[default]
    Loading,
    /// The last fetch succeeded. An empty list is a valid ready state
    /// ("nothing scheduled"), not an error.
    Ready(Arc<Vec<Arc<Event>>>),
    /// The last fetch failed. Carries the message to show the user next to
    /// the reload affordance.
    Failed(String),
}

impl FeedState {
    /// The event list, when one is available.
    #[must_use]
    pub fn events(&self) -> Option<&Arc<Vec<Arc<Event>>>> {
        match self {
            Self::Ready(events) => Some(events),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

/// Watch-backed event list in front of the site API.
#[derive(Debug)]
pub struct EventFeed {
    client: SiteClient,
    include_unpublished: bool,
    tx: watch::Sender<FeedState>,
}

impl EventFeed {
    #[must_use]
    pub fn new(client: SiteClient, include_unpublished: bool) -> Self {
        let (tx, _rx) = watch::channel(FeedState::Loading);
        Self {
            client,
            include_unpublished,
            tx,
        }
    }

    /// New receiver for the current and future states.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.tx.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> FeedState {
        self.tx.borrow().clone()
    }

    /// Fetches the event list and publishes the outcome.
    ///
    /// Flips to `Loading` for the duration of the request, then to `Ready`
    /// or `Failed`. Receivers see each flip.
    pub async fn refresh(&self) {
        self.tx.send_replace(FeedState::Loading);
        let result = self.client.list_events(self.include_unpublished).await;
        self.tx.send_replace(Self::state_from(result));
    }

    /// Maps a fetch result onto the published state. Factored out so the
    /// outcome handling is testable without a server.
    fn state_from(result: Result<Vec<vitrine_api::EventRecord>, vitrine_api::Error>) -> FeedState {
        match result {
            Ok(records) => {
                debug!(count = records.len(), "event list fetched");
                FeedState::Ready(Arc::new(events_from_records(records)))
            }
            Err(err) => {
                warn!(error = %err, "event list fetch failed");
                FeedState::Failed(err.to_string())
            }
        }
    }
}
