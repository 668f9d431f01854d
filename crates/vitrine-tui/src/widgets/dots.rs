//! Slide indicator dots for the spotlight carousel.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme;

/// One dot per slide, the current one highlighted: `· · ● · ·`.
pub fn line(total: usize, current: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(total);
    for index in 0..total {
        let (glyph, style) = if index == current {
            ("● ", Style::default().fg(theme::VIOLET))
        } else {
            ("· ", theme::key_hint())
        };
        spans.push(Span::styled(glyph, style));
    }
    Line::from(spans)
}

/// Map a click column (relative to the line's left edge) to a dot index.
pub fn hit(column: u16, total: usize) -> Option<usize> {
    let index = usize::from(column / 2);
    (index < total).then_some(index)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn click_maps_to_dot_cells() {
        assert_eq!(hit(0, 3), Some(0));
        assert_eq!(hit(1, 3), Some(0));
        assert_eq!(hit(4, 3), Some(2));
        assert_eq!(hit(6, 3), None);
    }

    #[test]
    fn line_highlights_current() {
        let line = line(3, 1);
        assert_eq!(line.spans.len(), 3);
        assert!(line.spans[1].content.starts_with('●'));
    }
}
