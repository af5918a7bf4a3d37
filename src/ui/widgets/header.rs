//! Panel header.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::colors;

pub fn render(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "  ModelHub",
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ·  model settings", Style::default().fg(colors::MUTED)),
    ]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors::BG)),
        area,
    );
}
