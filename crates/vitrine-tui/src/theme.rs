//! Palette and semantic styling, lifted from the association site's look:
//! indigo/purple chrome with per-event gradient accents.

use ratatui::style::{Color, Modifier, Style};
use vitrine_core::DerivedStatus;
use vitrine_core::status::StatusCode;

// ── Core Palette ──────────────────────────────────────────────────────

pub const INDIGO: Color = Color::Rgb(79, 70, 229); // #4f46e5
pub const VIOLET: Color = Color::Rgb(147, 51, 234); // #9333ea
pub const SKY: Color = Color::Rgb(56, 189, 248); // #38bdf8
pub const AMBER: Color = Color::Rgb(245, 158, 11); // #f59e0b
pub const EMERALD: Color = Color::Rgb(52, 211, 153); // #34d399
pub const ROSE: Color = Color::Rgb(244, 63, 94); // #f43f5e

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(203, 213, 225); // #cbd5e1
pub const BORDER_GRAY: Color = Color::Rgb(71, 85, 105); // #475569
pub const BG_HIGHLIGHT: Color = Color::Rgb(30, 41, 59); // #1e293b
pub const BG_DARK: Color = Color::Rgb(15, 23, 42); // #0f172a

/// Accent color for an event's gradient preset. The admin UI stores
/// Tailwind class strings; the first color stop picks the terminal accent.
pub fn gradient_accent(gradient: Option<&str>) -> Color {
    let Some(gradient) = gradient else {
        return INDIGO;
    };
    if gradient.contains("from-blue") {
        Color::Rgb(37, 99, 235) // blue-600
    } else if gradient.contains("from-purple") {
        VIOLET
    } else if gradient.contains("from-orange") {
        Color::Rgb(249, 115, 22) // orange-500
    } else if gradient.contains("from-green") || gradient.contains("from-emerald") {
        EMERALD
    } else if gradient.contains("from-pink") || gradient.contains("from-rose") {
        ROSE
    } else {
        INDIGO
    }
}

/// Style for a derived status badge. Pulsing statuses blink, glowing ones
/// are bold — the terminal rendition of the site's animated badges.
pub fn status_style(status: &DerivedStatus) -> Style {
    let color = match status.code {
        StatusCode::Today | StatusCode::Ongoing => EMERALD,
        StatusCode::Soon => AMBER,
        StatusCode::Upcoming => SKY,
        StatusCode::Cancelled => ROSE,
        StatusCode::Completed | StatusCode::Future => BORDER_GRAY,
    };
    let mut style = Style::default().fg(color);
    if status.pulsing {
        style = style.add_modifier(Modifier::SLOW_BLINK);
    }
    if status.glowing {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(SKY).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(VIOLET)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(SKY)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(VIOLET)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default().fg(VIOLET).add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(SKY).add_modifier(Modifier::BOLD)
}
