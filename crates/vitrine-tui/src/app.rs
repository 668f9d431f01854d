//! Application core — event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use vitrine_core::{EventFeed, FeedState};

use crate::action::Action;
use crate::event::{Event, EventReader};
use crate::screen::{Screen, ScreenId};
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    /// Current active screen.
    active_screen: ScreenId,
    /// Previous screen for GoBack.
    previous_screen: Option<ScreenId>,
    /// All screens, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Screen>>,
    /// Whether the app should keep running.
    running: bool,
    /// Latest feed state, for the status bar indicator.
    feed_state: FeedState,
    /// Help overlay visibility.
    help_visible: bool,
    /// Action sender — screens can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// The event feed driving every screen.
    feed: Arc<EventFeed>,
    /// Cancellation token for the data bridge task.
    data_cancel: CancellationToken,
}

impl App {
    pub fn new(feed: Arc<EventFeed>, advance_interval: Duration) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screens: HashMap<ScreenId, Box<dyn Screen>> =
            create_screens(advance_interval).into_iter().collect();

        Self {
            active_screen: ScreenId::Spotlight,
            previous_screen: None,
            screens,
            running: true,
            feed_state: FeedState::Loading,
            help_visible: false,
            action_tx,
            action_rx,
            feed,
            data_cancel: CancellationToken::new(),
        }
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }

        // Seed screens with the terminal size for mouse hit-testing.
        let (width, height) = tui.size().unwrap_or((80, 24));
        self.action_tx.send(Action::Resize(width, height))?;

        // Spawn the data bridge; it performs the initial fetch.
        {
            let feed = self.feed.clone();
            let cancel = self.data_cancel.clone();
            let tx = self.action_tx.clone();
            tokio::spawn(async move {
                crate::data_bridge::run_data_bridge(feed, tx, cancel).await;
            });
        }

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse_event(mouse)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        // Cancel the data bridge and clean up
        self.data_cancel.cancel();
        events.stop();
        tui.exit()?;
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the active screen.
    #[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.help_visible {
            // In help mode, Esc or ? closes help
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Global keybindings
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),

            // Help
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),

            // Screen navigation via number keys
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='2')) => {
                let n = c as u8 - b'0';
                if let Some(screen) = ScreenId::from_number(n) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }

            // Tab / Shift+Tab for screen cycling
            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }

            // Esc — context-dependent back
            (KeyModifiers::NONE, KeyCode::Esc) => return Ok(Some(Action::GoBack)),

            _ => {}
        }

        // Delegate to the active screen
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Handle mouse events (delegate to active screen).
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_mouse_event(mouse);
        }
        Ok(None)
    }

    /// Process a single action — update app state and propagate to screens.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(false);
                    }
                    self.previous_screen = Some(self.active_screen);
                    self.active_screen = *target;
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(true);
                    }
                }
            }

            Action::GoBack => {
                if let Some(prev) = self.previous_screen.take() {
                    self.action_tx.send(Action::SwitchScreen(prev))?;
                }
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::Reload => {
                // Manual refresh; the feed publishes loading/ready/failed
                // through the data bridge.
                let feed = self.feed.clone();
                tokio::spawn(async move {
                    feed.refresh().await;
                });
            }

            Action::Render => {}

            // Ticks, resizes, data updates, and slide jumps go to ALL
            // screens so the carousel timer and hit areas stay in sync
            // off-screen too. ShowSlide originates in the agenda but the
            // spotlight is what acts on it.
            Action::Tick
            | Action::Resize(..)
            | Action::FeedUpdated(_)
            | Action::ShowSlide(_) => {
                if let Action::FeedUpdated(state) = action {
                    self.feed_state = state.clone();
                }
                for screen in self.screens.values_mut() {
                    if let Some(follow_up) = screen.update(action)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            // Everything else goes to the active screen only
            other => {
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    if let Some(follow_up) = screen.update(other)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [tab bar] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }

        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// Render the bottom tab bar.
    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    /// Render the bottom status bar with feed status and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let feed_indicator = match &self.feed_state {
            FeedState::Loading => {
                Span::styled("◐ loading", Style::default().fg(theme::AMBER))
            }
            FeedState::Ready(events) => Span::styled(
                format!("● {} events", events.len()),
                Style::default().fg(theme::EMERALD),
            ),
            FeedState::Failed(_) => {
                Span::styled("○ fetch failed", Style::default().fg(theme::ROSE))
            }
        };

        let hints = Span::styled(" │ ? help  r reload  q quit", theme::key_hint());
        let line = Line::from(vec![Span::raw(" "), feed_indicator, hints]);
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render the help overlay centered on screen.
    #[allow(clippy::unused_self)]
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 54u16.min(area.width.saturating_sub(4));
        let help_height = 16u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;
        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        // Clear the background
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let help_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "  Navigation",
                Style::default().fg(theme::SKY),
            )]),
            Line::from(Span::styled("  ─────────", theme::key_hint())),
            Line::from(vec![
                Span::styled("  1-2       ", theme::key_hint_key()),
                Span::styled("Jump to screen", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  Tab       ", theme::key_hint_key()),
                Span::styled("Next screen", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  ←/→       ", theme::key_hint_key()),
                Span::styled("Previous / next slide", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  j/k ↑/↓   ", theme::key_hint_key()),
                Span::styled("Move in the agenda", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  Enter     ", theme::key_hint_key()),
                Span::styled("Show selection in spotlight", theme::key_hint()),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "  Global",
                Style::default().fg(theme::SKY),
            )]),
            Line::from(Span::styled("  ──────", theme::key_hint())),
            Line::from(vec![
                Span::styled("  space     ", theme::key_hint_key()),
                Span::styled("Pause / resume slideshow", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  r         ", theme::key_hint_key()),
                Span::styled("Reload events        ", theme::key_hint()),
                Span::styled("q  ", theme::key_hint_key()),
                Span::styled("Quit", theme::key_hint()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "                    Esc or ? to close",
                theme::key_hint(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
