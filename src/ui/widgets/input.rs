//! Search input: label row, bordered text box, clear glyph when non-empty.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::state::PickerState;
use crate::ui::theme::colors;

pub fn render(f: &mut Frame, picker: &PickerState, area: Rect) {
    let label_area = Rect { height: 1, ..area };
    f.render_widget(
        Paragraph::new(Span::styled(
            "Model",
            Style::default()
                .fg(colors::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        label_area,
    );

    let box_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if picker.open {
            colors::ACCENT
        } else {
            colors::BORDER
        }))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    let text_style = if picker.select_all {
        // Whole text "selected": next keystroke replaces it.
        Style::default()
            .fg(colors::ELEVATED)
            .bg(colors::ACCENT_SOFT)
    } else {
        Style::default().fg(colors::TEXT)
    };
    let shown: Vec<Span> = if picker.input.is_empty() {
        vec![Span::styled(
            "Search and select a model...",
            Style::default().fg(colors::MUTED),
        )]
    } else {
        vec![Span::styled(picker.input.as_str(), text_style)]
    };
    f.render_widget(Paragraph::new(Line::from(shown)), inner);

    // Clear affordance, only while there is something to clear.
    if !picker.input.is_empty() && inner.width > 1 {
        let glyph_area = Rect {
            x: inner.x + inner.width - 1,
            y: inner.y,
            width: 1,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Span::styled("✕", Style::default().fg(colors::MUTED))),
            glyph_area,
        );
    }

    let cursor_chars = picker
        .input
        .get(..picker.cursor.min(picker.input.len()))
        .map(|s| s.chars().count())
        .unwrap_or(0) as u16;
    let x = (inner.x + cursor_chars).min(inner.x + inner.width.saturating_sub(1));
    f.set_cursor_position(Position { x, y: inner.y });
}
