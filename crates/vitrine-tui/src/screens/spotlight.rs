//! Spotlight screen — auto-advancing hero view of the ranked events.
//!
//! Layout:
//! ┌─ Spotlight ────────────────────────────────────────────────────────┐
//! │                                                                    │
//! │   ★ Conférence IA — 2e édition                                     │
//! │   ● Tomorrow                ⏱ 18h 20m                              │
//! │   Mar 14 Oct 2026, 09:00 UTC · Carthage                            │
//! │                                                                    │
//! │   Three days of talks and workshops…                               │
//! │                                                                    │
//! │                         · ● · · ·                                  │
//! ├─ ←/→ navigate  space pause  r reload ─────────────────────────────┤
//! └────────────────────────────────────────────────────────────────────┘
//!
//! The carousel owns its advance deadline; hovering the card with the
//! mouse suspends it exactly like the website hero.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use vitrine_core::{Carousel, Event, FeedState, rank_events};

use crate::action::Action;
use crate::screen::Screen;
use crate::theme;
use crate::widgets::{dots, status_badge};

pub struct SpotlightScreen {
    focused: bool,
    feed: FeedState,
    /// Ranked copy of the ready list; re-ranked on every feed update.
    events: Vec<Arc<Event>>,
    carousel: Carousel,
    /// Screen content region from the last resize, for mouse hit-testing.
    content_area: Rect,
}

impl SpotlightScreen {
    pub fn new(advance_interval: Duration) -> Self {
        Self {
            focused: false,
            feed: FeedState::Loading,
            events: Vec::new(),
            carousel: Carousel::with_interval(0, advance_interval, Instant::now()),
            content_area: Rect::default(),
        }
    }

    fn apply_feed(&mut self, state: &FeedState) {
        self.feed = state.clone();
        let now = Instant::now();
        match state.events() {
            Some(events) => {
                self.events = events.as_ref().clone();
                rank_events(&mut self.events, Utc::now());
                self.carousel.set_len(self.events.len(), now);
            }
            // Fetch failure keeps no partial list and does no timer work.
            None => {
                self.events.clear();
                self.carousel.set_len(0, now);
            }
        }
    }

    fn current_event(&self) -> Option<&Arc<Event>> {
        self.events.get(self.carousel.current())
    }

    /// Mirror of the render layout, so mouse events can be hit-tested
    /// without mutable access during drawing. Returns (card, dots) areas.
    fn hit_areas(&self) -> (Rect, Rect) {
        let area = self.content_area;
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        let dots_height = 1u16.min(inner.height);
        let card = Rect {
            height: inner.height.saturating_sub(dots_height),
            ..inner
        };
        // The dots line is centered; hit-testing uses its real width.
        #[allow(clippy::cast_possible_truncation)]
        let dots_width = (self.carousel.len() as u16).saturating_mul(2);
        let dots = Rect {
            x: inner.x + inner.width.saturating_sub(dots_width) / 2,
            y: inner.y + inner.height.saturating_sub(dots_height),
            width: dots_width.min(inner.width),
            height: dots_height,
        };
        (card, dots)
    }

    fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height
    }

    // ── Render states ────────────────────────────────────────────────

    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    fn render_message(&self, frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
        let block = self.frame_block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(lines.len() as u16),
            Constraint::Fill(1),
        ])
        .split(inner);
        frame.render_widget(Paragraph::new(lines).centered(), vertical[1]);
    }

    fn frame_block(&self) -> Block<'static> {
        let border = if self.focused {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        Block::default()
            .title(" Spotlight ")
            .title_style(theme::title_style())
            .title_bottom(Line::from(vec![
                Span::styled(" ←/→ ", theme::key_hint_key()),
                Span::styled("navigate ", theme::key_hint()),
                Span::styled(" space ", theme::key_hint_key()),
                Span::styled("pause ", theme::key_hint()),
                Span::styled(" r ", theme::key_hint_key()),
                Span::styled("reload ", theme::key_hint()),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, event: &Event) {
        let now = Utc::now();
        let view = self.carousel.view();
        let accent = theme::gradient_accent(event.gradient.as_deref());

        let mut title_spans = Vec::new();
        if event.featured {
            title_spans.push(Span::styled("★ ", Style::default().fg(theme::AMBER)));
        }
        title_spans.push(Span::styled(
            event.title.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));

        let mut status_line = vec![status_badge::badge(event, now)];
        if let Some(countdown) = status_badge::countdown(event, now) {
            status_line.push(Span::raw("    "));
            status_line.push(countdown);
        }
        if view.paused || view.hovered {
            status_line.push(Span::raw("    "));
            status_line.push(Span::styled("⏸ paused", theme::key_hint()));
        }

        let mut when = format!("{}", event.start);
        if let Some(end) = &event.end {
            when.push_str(&format!(" → {end}"));
        }

        let mut lines = vec![
            Line::from(""),
            Line::from(title_spans),
            Line::from(""),
            Line::from(status_line),
            Line::from(Span::styled(
                format!("{when} · {}", event.location),
                theme::table_row(),
            )),
        ];
        if let Some(subtitle) = &event.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle.clone(),
                Style::default().fg(theme::DIM_WHITE).add_modifier(Modifier::ITALIC),
            )));
        }
        if let Some(attendees) = &event.attendees {
            lines.push(Line::from(Span::styled(
                format!("👥 {attendees}"),
                theme::key_hint(),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            event.description.clone(),
            theme::table_row(),
        )));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}

impl Screen for SpotlightScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let now = Instant::now();
        match key.code {
            KeyCode::Right | KeyCode::Char('l' | 'n') => {
                self.carousel.next(now);
                Ok(None)
            }
            KeyCode::Left | KeyCode::Char('h' | 'p') => {
                self.carousel.prev(now);
                Ok(None)
            }
            KeyCode::Char(' ') => {
                if self.carousel.view().paused {
                    self.carousel.resume(now);
                } else {
                    self.carousel.pause();
                }
                Ok(None)
            }
            KeyCode::Char('r') => Ok(Some(Action::Reload)),
            _ => Ok(None),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let now = Instant::now();
        let (card_area, dots_area) = self.hit_areas();
        match mouse.kind {
            // Hover over the card suspends auto-advance, exactly like the
            // website hero. The timer is cleared, not merely ignored.
            MouseEventKind::Moved => {
                let inside = Self::contains(card_area, mouse.column, mouse.row);
                self.carousel.set_hovered(inside, now);
                Ok(None)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if Self::contains(dots_area, mouse.column, mouse.row) {
                    let column = mouse.column - dots_area.x;
                    if let Some(index) = dots::hit(column, self.carousel.len()) {
                        self.carousel.go_to(index, now);
                    }
                }
                Ok(None)
            }
            MouseEventKind::ScrollDown => {
                self.carousel.next(now);
                Ok(None)
            }
            MouseEventKind::ScrollUp => {
                self.carousel.prev(now);
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                self.carousel.tick(Instant::now());
            }
            Action::FeedUpdated(state) => self.apply_feed(state),
            Action::ShowSlide(index) => {
                self.carousel.go_to(*index, Instant::now());
            }
            Action::Resize(width, height) => {
                // App layout: content above a tab bar and a status bar.
                self.content_area = Rect::new(0, 0, *width, height.saturating_sub(2));
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.feed {
            FeedState::Loading => {
                self.render_message(
                    frame,
                    area,
                    vec![Line::from(Span::styled(
                        "Loading events…",
                        theme::table_row(),
                    ))],
                );
            }
            FeedState::Failed(message) => {
                self.render_message(
                    frame,
                    area,
                    vec![
                        Line::from(Span::styled(
                            "Could not load events",
                            Style::default().fg(theme::ROSE).add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(message.clone(), theme::table_row())),
                        Line::from(""),
                        Line::from(vec![
                            Span::styled("r ", theme::key_hint_key()),
                            Span::styled("retry", theme::key_hint()),
                        ]),
                    ],
                );
            }
            FeedState::Ready(_) if self.events.is_empty() => {
                self.render_message(
                    frame,
                    area,
                    vec![Line::from(Span::styled(
                        "Nothing scheduled — check back soon",
                        theme::table_row(),
                    ))],
                );
            }
            FeedState::Ready(_) => {
                let Some(event) = self.current_event() else {
                    return;
                };
                let block = self.frame_block();
                let inner = block.inner(area);
                frame.render_widget(block, area);

                let rows = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(1), // dots
                ])
                .split(inner);

                self.render_card(frame, rows[0], event);

                let view = self.carousel.view();
                frame.render_widget(
                    Paragraph::new(dots::line(view.total, view.index)).centered(),
                    rows[1],
                );
            }
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use vitrine_core::{DEFAULT_ADVANCE_INTERVAL, EventDate, EventId, EventStatus};

    use super::*;

    fn screen() -> SpotlightScreen {
        SpotlightScreen::new(DEFAULT_ADVANCE_INTERVAL)
    }

    fn ready(count: usize) -> FeedState {
        let events = (0..count)
            .map(|i| {
                Arc::new(Event {
                    id: EventId::from(format!("e{i}")),
                    title: format!("Event {i}"),
                    subtitle: None,
                    description: "desc".into(),
                    start: EventDate::At(Utc::now() + chrono::Duration::days(i as i64 + 2)),
                    end: None,
                    location: "Lille".into(),
                    attendees: None,
                    image_url: None,
                    link: None,
                    featured: false,
                    status: EventStatus::Upcoming,
                    published: true,
                    gradient: None,
                })
            })
            .collect::<Vec<_>>();
        FeedState::Ready(Arc::new(events))
    }

    #[test]
    fn feed_update_sizes_the_carousel() {
        let mut screen = screen();
        screen.apply_feed(&ready(3));
        assert_eq!(screen.carousel.view().total, 3);
        assert!(screen.carousel.next_advance().is_some());
    }

    #[test]
    fn failure_clears_events_and_timer() {
        let mut screen = screen();
        screen.apply_feed(&ready(3));
        screen.apply_feed(&FeedState::Failed("boom".into()));
        assert!(screen.events.is_empty());
        assert_eq!(screen.carousel.next_advance(), None);
    }

    #[test]
    fn single_event_never_auto_advances() {
        let mut screen = screen();
        screen.apply_feed(&ready(1));
        assert_eq!(screen.carousel.next_advance(), None);
    }
}
