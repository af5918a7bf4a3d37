//! Status bar: connection + model count on the left, shortcuts on the right.

use ratatui::{layout::Rect, style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::colors;

pub fn render(f: &mut Frame, area: Rect, connected: bool, model_count: usize) {
    let left = if connected {
        format!(" {} models", model_count)
    } else {
        " Host unreachable".to_string()
    };
    let right = " ↑↓ navigate  Enter select  Ctrl+F favorite  Esc close  Ctrl+C quit ";
    let width = area.width as usize;
    let pad = width.saturating_sub(left.chars().count() + right.chars().count());
    let line = format!("{}{}{}", left, " ".repeat(pad), right);
    f.render_widget(
        Paragraph::new(Span::styled(
            line,
            Style::default().fg(colors::MUTED).bg(colors::ELEVATED),
        )),
        area,
    );
}
