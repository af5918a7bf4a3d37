//! Dropdown: ranked model rows with match highlighting and favorite stars.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::search::{LabelSegment, RankedModel};
use crate::ui::layout;
use crate::ui::theme::colors;

pub fn render(f: &mut Frame, results: &[RankedModel], highlighted: Option<usize>, area: Rect) {
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::ACCENT))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if results.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No matching models",
                Style::default().fg(colors::MUTED),
            )),
            inner,
        );
        return;
    }

    let viewport = inner.height as usize;
    let (offset, take) = layout::list_window(highlighted, results.len(), viewport);

    let lines: Vec<Line> = results
        .iter()
        .enumerate()
        .skip(offset)
        .take(take)
        .map(|(i, model)| row_line(model, highlighted == Some(i), inner.width))
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

/// One row: accent bar when highlighted, label runs (fuzzy hits get the fixed
/// find-match style — segments are data, nothing else can style itself), star
/// glyph pinned to the right edge.
fn row_line(model: &RankedModel, selected: bool, width: u16) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::styled(
        if selected { "▎ " } else { "  " },
        Style::default().fg(colors::ACCENT),
    )];

    let base = if selected {
        Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_DIM)
    };
    let mut label_width = 0usize;
    for segment in &model.segments {
        let (text, style) = match segment {
            LabelSegment::Plain(t) => (t.clone(), base),
            LabelSegment::Hit(t) => (t.clone(), base.bg(colors::MATCH_BG)),
        };
        label_width += text.chars().count();
        spans.push(Span::styled(text, style));
    }

    let star = if model.favorite { "★" } else { "☆" };
    let star_style = if model.favorite {
        Style::default().fg(colors::STAR)
    } else {
        Style::default().fg(colors::MUTED)
    };
    let used = 2 + label_width + 2;
    let pad = (width as usize).saturating_sub(used).max(1);
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(star.to_string(), star_style));

    Line::from(spans)
}
