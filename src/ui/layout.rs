//! Panel layout plus the dropdown geometry shared by render and hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{DROPDOWN_MAX_ROWS, HEADER_HEIGHT, INPUT_HEIGHT, MARGIN_X, STATUS_HEIGHT};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub input: Rect,
    pub detail: Rect,
    pub status: Rect,
}

pub fn compute(area: Rect) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let inset = |r: Rect| Rect {
        x: r.x + MARGIN_X,
        y: r.y,
        width: r.width.saturating_sub(2 * MARGIN_X),
        height: r.height,
    };
    LayoutRegions {
        header: chunks[0],
        input: inset(chunks[1]),
        detail: inset(chunks[2]),
        status: chunks[3],
    }
}

/// Dropdown overlay: anchored directly under the input box, covering the top
/// of the detail area. Height is rows + border, capped by available space.
pub fn dropdown_rect(regions: &LayoutRegions, result_count: usize) -> Rect {
    let rows = (result_count as u16).clamp(1, DROPDOWN_MAX_ROWS);
    let height = (rows + 2).min(regions.detail.height);
    Rect {
        x: regions.input.x,
        y: regions.detail.y,
        width: regions.input.width,
        height,
    }
}

/// Visible slice of the result list. Derived purely from the highlight so the
/// highlighted row is always in view; no highlight pins the window to the top
/// (typing resets the highlight, which scrolls the list back up).
pub fn list_window(highlighted: Option<usize>, len: usize, viewport: usize) -> (usize, usize) {
    if viewport == 0 || len == 0 {
        return (0, 0);
    }
    let offset = match highlighted {
        Some(i) if i >= viewport => i + 1 - viewport,
        _ => 0,
    };
    (offset, viewport.min(len - offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_starts_at_top_without_highlight() {
        assert_eq!(list_window(None, 20, 8), (0, 8));
    }

    #[test]
    fn window_follows_highlight_past_the_viewport() {
        assert_eq!(list_window(Some(7), 20, 8), (0, 8));
        assert_eq!(list_window(Some(8), 20, 8), (1, 8));
        assert_eq!(list_window(Some(19), 20, 8), (12, 8));
    }

    #[test]
    fn window_clamps_to_short_lists() {
        assert_eq!(list_window(None, 3, 8), (0, 3));
        assert_eq!(list_window(Some(2), 3, 8), (0, 3));
        assert_eq!(list_window(None, 0, 8), (0, 0));
    }
}
