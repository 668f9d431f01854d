//! Terminal event reader — merges crossterm input with tick and render
//! timers into one stream for the app loop.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Events delivered to the app loop.
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Coarse timer for state updates (carousel deadlines, countdowns).
    Tick,
    /// Fine timer driving redraws.
    Render,
}

/// Background task reading crossterm events and emitting periodic ticks.
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    pub fn new(tick_interval: Duration, render_interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        tokio::spawn(async move {
            let mut stream = EventStream::new();
            let mut tick = tokio::time::interval(tick_interval);
            let mut render = tokio::time::interval(render_interval);

            loop {
                tokio::select! {
                    () = task_cancel.cancelled() => break,

                    _ = tick.tick() => {
                        if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                    _ = render.tick() => {
                        if tx.send(Event::Render).is_err() {
                            break;
                        }
                    }
                    maybe = stream.next() => {
                        let Some(Ok(event)) = maybe else { break };
                        let mapped = match event {
                            // Key repeats and releases would double-fire
                            // navigation on some terminals.
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                Some(Event::Key(key))
                            }
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(mapped) = mapped {
                            if tx.send(mapped).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self { rx, cancel }
    }

    /// Next event, or `None` once the reader task has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Stop the reader task.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}
