//! Input mapping: keys and mouse to picker actions.

use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::actions::Action;
use crate::ui::layout::{self, LayoutRegions};

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(event: &KeyEvent, open: bool) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);
    let ctrl = mods.contains(KeyModifiers::CONTROL);

    if code == KeyCode::Char('c') && ctrl {
        return Some(Action::Quit);
    }
    if code == KeyCode::Char('u') && ctrl {
        return Some(Action::ClearInput);
    }
    if code == KeyCode::Char('f') && ctrl {
        return Some(Action::ToggleFavoriteHighlighted);
    }
    if code == KeyCode::Char('e') && ctrl {
        return Some(Action::ToggleDetail);
    }
    if code == KeyCode::Char('r') && ctrl {
        return Some(Action::Reload);
    }

    if code == KeyCode::Esc && mods.is_empty() {
        return if open {
            Some(Action::CloseDropdown)
        } else {
            Some(Action::Quit)
        };
    }
    if code == KeyCode::Enter && mods.is_empty() {
        return Some(Action::CommitHighlighted);
    }
    if code == KeyCode::Backspace && mods.is_empty() {
        return Some(Action::Backspace);
    }
    if code == KeyCode::Up && mods.is_empty() {
        return Some(Action::HighlightUp);
    }
    if code == KeyCode::Down && mods.is_empty() {
        // From a closed dropdown, Down behaves like focusing the input.
        return if open {
            Some(Action::HighlightDown)
        } else {
            Some(Action::FocusInput)
        };
    }

    // Any other character goes to the search input (allow Alt for accented
    // chars; only block Ctrl/Cmd).
    if let KeyCode::Char(c) = code {
        if !ctrl && !mods.contains(KeyModifiers::SUPER) {
            return Some(Action::Char(c));
        }
    }

    None
}

/// Map a mouse event to an action using the same geometry the renderer uses.
/// Clicks inside the input focus it (or hit the clear glyph); clicks on a
/// dropdown row commit it unless they land on the star column; anything else
/// while the dropdown is open counts as click-outside.
pub fn mouse_to_action(
    event: &MouseEvent,
    area: Rect,
    open: bool,
    input_nonempty: bool,
    highlighted: Option<usize>,
    result_count: usize,
) -> Option<Action> {
    let regions = layout::compute(area);
    let (col, row) = (event.column, event.row);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if in_input_box(&regions, col, row) {
                if input_nonempty && col == clear_glyph_col(&regions) {
                    return Some(Action::ClearInput);
                }
                return Some(Action::FocusInput);
            }
            if open {
                if let Some(idx) = dropdown_row_at(&regions, col, row, highlighted, result_count) {
                    let dd = layout::dropdown_rect(&regions, result_count);
                    // Star zone: the three rightmost inner columns.
                    if col >= dd.x + dd.width.saturating_sub(4) {
                        return Some(Action::ToggleFavoriteRow(idx));
                    }
                    return Some(Action::CommitRow(idx));
                }
                return Some(Action::CloseDropdown);
            }
            None
        }
        MouseEventKind::Moved if open => {
            dropdown_row_at(&regions, col, row, highlighted, result_count).map(Action::HighlightRow)
        }
        _ => None,
    }
}

/// The bordered input box occupies the input region below its label row.
fn in_input_box(regions: &LayoutRegions, col: u16, row: u16) -> bool {
    let r = regions.input;
    col >= r.x && col < r.x + r.width && row > r.y && row < r.y + r.height
}

fn clear_glyph_col(regions: &LayoutRegions) -> u16 {
    regions.input.x + regions.input.width.saturating_sub(2)
}

fn dropdown_row_at(
    regions: &LayoutRegions,
    col: u16,
    row: u16,
    highlighted: Option<usize>,
    result_count: usize,
) -> Option<usize> {
    if result_count == 0 {
        return None;
    }
    let dd = layout::dropdown_rect(regions, result_count);
    let inner_top = dd.y + 1;
    let inner_bottom = dd.y + dd.height.saturating_sub(1);
    if col < dd.x || col >= dd.x + dd.width || row < inner_top || row >= inner_bottom {
        return None;
    }
    let viewport = dd.height.saturating_sub(2) as usize;
    let (offset, take) = layout::list_window(highlighted, result_count, viewport);
    let visible = (row - inner_top) as usize;
    if visible < take {
        Some(offset + visible)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: mods,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn esc_closes_when_open_and_quits_when_closed() {
        let esc = key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(key_to_action(&esc, true), Some(Action::CloseDropdown));
        assert_eq!(key_to_action(&esc, false), Some(Action::Quit));
    }

    #[test]
    fn down_focuses_when_closed_and_moves_highlight_when_open() {
        let down = key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(key_to_action(&down, false), Some(Action::FocusInput));
        assert_eq!(key_to_action(&down, true), Some(Action::HighlightDown));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut enter = key(KeyCode::Enter, KeyModifiers::NONE);
        enter.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(&enter, true), None);
    }

    #[test]
    fn plain_chars_type_and_ctrl_chars_do_not() {
        let a = key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_to_action(&a, true), Some(Action::Char('a')));
        let ctrl_x = key(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(&ctrl_x, true), None);
    }

    fn click(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 24,
    };

    #[test]
    fn click_in_input_focuses() {
        // Input region: rows 2..6 inset by the margin; the box is rows 3..6.
        let act = mouse_to_action(&click(10, 4), AREA, false, false, None, 0);
        assert_eq!(act, Some(Action::FocusInput));
    }

    #[test]
    fn click_on_a_row_commits_it() {
        let regions = layout::compute(AREA);
        let dd = layout::dropdown_rect(&regions, 5);
        let act = mouse_to_action(&click(dd.x + 2, dd.y + 1), AREA, true, true, None, 5);
        assert_eq!(act, Some(Action::CommitRow(0)));
        let act = mouse_to_action(&click(dd.x + 2, dd.y + 3), AREA, true, true, None, 5);
        assert_eq!(act, Some(Action::CommitRow(2)));
    }

    #[test]
    fn click_on_star_zone_toggles_instead_of_committing() {
        let regions = layout::compute(AREA);
        let dd = layout::dropdown_rect(&regions, 5);
        let star_col = dd.x + dd.width - 2;
        let act = mouse_to_action(&click(star_col, dd.y + 1), AREA, true, true, None, 5);
        assert_eq!(act, Some(Action::ToggleFavoriteRow(0)));
    }

    #[test]
    fn click_outside_while_open_closes() {
        let act = mouse_to_action(&click(30, 22), AREA, true, true, None, 5);
        assert_eq!(act, Some(Action::CloseDropdown));
    }

    #[test]
    fn click_outside_while_closed_does_nothing() {
        let act = mouse_to_action(&click(30, 22), AREA, false, true, None, 0);
        assert_eq!(act, None);
    }
}
