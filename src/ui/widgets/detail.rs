//! Detail area: committed model's metadata, or help text when the committed
//! id is unknown to the current catalog.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::services::{format_price, format_tokens};
use crate::state::AppState;
use crate::ui::markdown;
use crate::ui::theme::colors;

/// Collapsed descriptions show at most this many lines.
const DESCRIPTION_PREVIEW_LINES: usize = 3;

pub fn render(f: &mut Frame, state: &AppState, base_url: &str, area: Rect) {
    let lines = if state.selection_known() {
        detail_lines(state)
    } else {
        help_lines(base_url)
    };
    let para = Paragraph::new(lines)
        .style(Style::default().bg(colors::BG))
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn detail_lines(state: &AppState) -> Vec<Line<'static>> {
    // selection_known() guarantees both lookups below.
    let id = state.config.selected_model_id.clone().unwrap_or_default();
    let info = state.models.get(&id).cloned().unwrap_or_default();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                info.label_or(&id).to_string(),
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(id.clone(), Style::default().fg(colors::MUTED)),
        ]),
        Line::from(Span::raw("")),
    ];

    let fact = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<14}", name), Style::default().fg(colors::ACCENT_SOFT)),
            Span::styled(value, Style::default().fg(colors::TEXT_DIM)),
        ])
    };
    if let Some(n) = info.context_window {
        lines.push(fact("Context", format!("{} tokens", format_tokens(n))));
    }
    if let Some(n) = info.max_tokens {
        lines.push(fact("Max output", format!("{} tokens", format_tokens(n))));
    }
    if let Some(b) = info.supports_images {
        lines.push(fact("Images", if b { "Supported" } else { "Not supported" }.to_string()));
    }
    if let Some(p) = info.input_price {
        lines.push(fact("Input price", format_price(p)));
    }
    if let Some(p) = info.output_price {
        lines.push(fact("Output price", format_price(p)));
    }

    if let Some(desc) = info.description.as_deref() {
        lines.push(Line::from(Span::raw("")));
        let mut body = markdown::to_lines(desc);
        if !state.picker.detail_expanded && body.len() > DESCRIPTION_PREVIEW_LINES {
            body.truncate(DESCRIPTION_PREVIEW_LINES);
            body.push(Line::from(Span::styled(
                "… Ctrl+E to expand",
                Style::default().fg(colors::MUTED),
            )));
        }
        lines.extend(body);
    }

    lines
}

fn help_lines(base_url: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "The model list is fetched automatically from the ModelHub host.",
            Style::default().fg(colors::TEXT_DIM),
        )),
        Line::from(vec![
            Span::styled("Catalog: ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(
                format!("{}/models", base_url),
                Style::default()
                    .fg(colors::ACCENT_SOFT)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(Span::styled(
            "If you don't see any models, check your API key and connection.",
            Style::default().fg(colors::TEXT_DIM),
        )),
    ]
}
