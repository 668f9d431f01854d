//! Agenda screen — the full ranked event table.
//!
//! Layout:
//! ┌─ Agenda ───────────────────────────────────────────────────────────┐
//! │  Title                 When                    Status      Where   │
//! │  ★ Conférence IA       Mar 14 Oct 2026, 09:00  ● Tomorrow  Carthage│
//! │    Assemblée générale  Jeu 01 Mar 2026, 18:00  This week   Tunis   │
//! │  …                                                                 │
//! ├─ j/k move  Enter spotlight  r reload ─────────────────────────────┤
//! └────────────────────────────────────────────────────────────────────┘
//!
//! `Enter` jumps the spotlight to the selected event.

use std::sync::Arc;

use chrono::Utc;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use vitrine_core::{Event, FeedState, derive_status, rank_events};

use crate::action::Action;
use crate::screen::{Screen, ScreenId};
use crate::theme;
use crate::widgets::status_badge;

pub struct AgendaScreen {
    focused: bool,
    feed: FeedState,
    events: Vec<Arc<Event>>,
    selected: usize,
}

impl AgendaScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            feed: FeedState::Loading,
            events: Vec::new(),
            selected: 0,
        }
    }

    fn apply_feed(&mut self, state: &FeedState) {
        self.feed = state.clone();
        match state.events() {
            Some(events) => {
                self.events = events.as_ref().clone();
                rank_events(&mut self.events, Utc::now());
                if self.selected >= self.events.len() {
                    self.selected = 0;
                }
            }
            None => {
                self.events.clear();
                self.selected = 0;
            }
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::as_conversions)]
    fn move_selection(&mut self, delta: isize) {
        if self.events.is_empty() {
            return;
        }
        let len = self.events.len() as isize;
        let next = (self.selected as isize + delta).rem_euclid(len);
        self.selected = usize::try_from(next).unwrap_or(0);
    }

    fn row(&self, index: usize, event: &Event) -> Row<'static> {
        let now = Utc::now();
        let status = derive_status(event, now);
        let accent = theme::gradient_accent(event.gradient.as_deref());

        let marker = if event.featured { "★ " } else { "  " };
        let style = if index == self.selected && self.focused {
            theme::table_selected()
        } else if status.code == vitrine_core::StatusCode::Completed
            || status.code == vitrine_core::StatusCode::Cancelled
        {
            Style::default().fg(theme::BORDER_GRAY)
        } else {
            theme::table_row()
        };

        Row::new(vec![
            Cell::from(Line::from(vec![
                Span::styled(marker.to_owned(), Style::default().fg(theme::AMBER)),
                Span::styled(event.title.clone(), Style::default().fg(accent)),
            ])),
            Cell::from(event.start.to_string()),
            Cell::from(Line::from(status_badge::badge(event, now))),
            Cell::from(event.location.clone()),
        ])
        .style(style)
    }

    fn frame_block(&self) -> Block<'static> {
        let border = if self.focused {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        Block::default()
            .title(" Agenda ")
            .title_style(theme::title_style())
            .title_bottom(Line::from(vec![
                Span::styled(" j/k ", theme::key_hint_key()),
                Span::styled("move ", theme::key_hint()),
                Span::styled(" Enter ", theme::key_hint_key()),
                Span::styled("spotlight ", theme::key_hint()),
                Span::styled(" r ", theme::key_hint_key()),
                Span::styled("reload ", theme::key_hint()),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, text: Text<'_>) {
        let block = self.frame_block();
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(text).centered(), inner);
    }
}

impl Screen for AgendaScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                self.move_selection(1);
                Ok(None)
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.move_selection(-1);
                Ok(None)
            }
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                self.selected = 0;
                Ok(None)
            }
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                self.selected = self.events.len().saturating_sub(1);
                Ok(None)
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                if self.events.is_empty() {
                    return Ok(None);
                }
                // Spotlight shows the same ranked order, so the row index
                // is the slide index.
                Ok(Some(Action::ShowSlide(self.selected)))
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => Ok(Some(Action::Reload)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::FeedUpdated(state) => self.apply_feed(state),
            // A slide jump implies switching to the spotlight screen.
            Action::ShowSlide(_) => return Ok(Some(Action::SwitchScreen(ScreenId::Spotlight))),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.feed {
            FeedState::Loading => {
                self.render_message(frame, area, Text::styled("Loading events…", theme::table_row()));
            }
            FeedState::Failed(message) => {
                self.render_message(
                    frame,
                    area,
                    Text::from(vec![
                        Line::styled(
                            "Could not load events",
                            Style::default().fg(theme::ROSE).add_modifier(Modifier::BOLD),
                        ),
                        Line::styled(message.clone(), theme::table_row()),
                    ]),
                );
            }
            FeedState::Ready(_) if self.events.is_empty() => {
                self.render_message(
                    frame,
                    area,
                    Text::styled("Nothing scheduled — check back soon", theme::table_row()),
                );
            }
            FeedState::Ready(_) => {
                let block = self.frame_block();

                let rows = self
                    .events
                    .iter()
                    .enumerate()
                    .map(|(index, event)| self.row(index, event));

                let table = Table::new(
                    rows,
                    [
                        Constraint::Fill(2),
                        Constraint::Length(26),
                        Constraint::Length(18),
                        Constraint::Fill(1),
                    ],
                )
                .header(
                    Row::new(vec!["Title", "When", "Status", "Where"])
                        .style(theme::table_header()),
                )
                .block(block);

                let mut state = TableState::default().with_selected(Some(self.selected));
                frame.render_stateful_widget(table, area, &mut state);
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
    use vitrine_core::{EventDate, EventId, EventStatus};

    use super::*;

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
                    location: "Bordeaux".into(),
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
    fn selection_wraps_and_survives_shrink() {
        let mut screen = AgendaScreen::new();
        screen.apply_feed(&ready(3));
        screen.move_selection(-1);
        assert_eq!(screen.selected, 2);
        screen.apply_feed(&ready(2));
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn enter_becomes_show_slide_then_screen_switch() {
        let mut screen = AgendaScreen::new();
        screen.apply_feed(&ready(2));
        screen.move_selection(1);
        let action = screen
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert!(matches!(action, Some(Action::ShowSlide(1))));

        let follow_up = screen.update(&Action::ShowSlide(1)).unwrap();
        assert!(matches!(
            follow_up,
            Some(Action::SwitchScreen(ScreenId::Spotlight))
        ));
    }
}
