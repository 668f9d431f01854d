//! Screen trait and screen identifier enum.

use std::fmt;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use crate::action::Action;

/// A top-level screen behind the tab bar.
///
/// Screens receive input only while active, but every [`Action`] that
/// carries shared state (ticks, resizes, feed updates, slide jumps) is
/// fanned out to all of them so off-screen state never goes stale.
pub trait Screen: Send {
    /// Handle a keyboard event. Returns an action to dispatch, or None.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Handle a mouse event. Returns an action to dispatch, or None.
    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Process a dispatched action. May return a follow-up action.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into the provided frame area.
    fn render(&self, frame: &mut Frame, area: Rect);

    /// Told when this screen gains or loses the tab-bar selection.
    fn set_focused(&mut self, _focused: bool) {}
}

/// Identifies each primary TUI screen, navigable by number keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    /// Auto-advancing hero view of the ranked events.
    #[default]
    Spotlight, // 1
    /// Full agenda table.
    Agenda, // 2
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 2] = [Self::Spotlight, Self::Agenda];

    /// Numeric key for this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::Spotlight => 1,
            Self::Agenda => 2,
        }
    }

    /// Screen from a numeric key. Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Spotlight),
            2 => Some(Self::Agenda),
            _ => None,
        }
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Short label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Spotlight => "Spotlight",
            Self::Agenda => "Agenda",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_wraps_both_ways() {
        assert_eq!(ScreenId::Spotlight.next(), ScreenId::Agenda);
        assert_eq!(ScreenId::Agenda.next(), ScreenId::Spotlight);
        assert_eq!(ScreenId::Spotlight.prev(), ScreenId::Agenda);
    }

    #[test]
    fn number_keys_round_trip() {
        for id in ScreenId::ALL {
            assert_eq!(ScreenId::from_number(id.number()), Some(id));
        }
        assert_eq!(ScreenId::from_number(9), None);
    }
}
