//! Actions — messages flowing through the app's dispatch loop.

use vitrine_core::FeedState;

use crate::screen::ScreenId;

/// Everything that can happen in the TUI, as a single message type.
/// Screens return actions from their event handlers; the app loop
/// processes them and fans data updates out to every screen.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ──
    SwitchScreen(ScreenId),
    GoBack,
    ToggleHelp,

    // ── Data ──
    /// The event feed changed state (loading / ready / failed).
    FeedUpdated(FeedState),
    /// User asked for a fresh fetch (`r`). Retry after failure is always
    /// manual, never automatic.
    Reload,

    // ── Spotlight ──
    /// Jump the spotlight to a specific slide (from the agenda screen).
    ShowSlide(usize),
}
