//! Markdown to ratatui lines for model descriptions: paragraphs, emphasis,
//! inline code, links, lists. Descriptions are short prose; code blocks and
//! headings just render as plain/bold text.

use pulldown_cmark::{Event, Options, Parser, Tag};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::colors;

pub fn to_lines(md: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut bold = false;
    let mut link: Option<String> = None;
    let mut list_depth: usize = 0;
    let mut ordered_index: Option<u64> = None;

    for event in Parser::new_ext(md, Options::empty()) {
        match event {
            Event::Start(Tag::Strong) | Event::Start(Tag::Emphasis) | Event::Start(Tag::Heading(..)) => {
                bold = true;
            }
            Event::End(Tag::Strong) | Event::End(Tag::Emphasis) => bold = false,
            Event::End(Tag::Heading(..)) => {
                bold = false;
                flush(&mut current, &mut lines);
            }

            Event::Start(Tag::Link(_, dest, _)) => link = Some(dest.to_string()),
            Event::End(Tag::Link(..)) => {
                if let Some(url) = link.take() {
                    current.push(Span::styled(
                        format!(" ({})", url),
                        Style::default().fg(colors::MUTED),
                    ));
                }
            }

            Event::Start(Tag::List(start)) => {
                flush(&mut current, &mut lines);
                list_depth += 1;
                ordered_index = start;
            }
            Event::End(Tag::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    ordered_index = None;
                }
            }
            Event::Start(Tag::Item) => {
                let indent = "  ".repeat(list_depth.saturating_sub(1));
                let bullet = if let Some(idx) = ordered_index {
                    ordered_index = Some(idx + 1);
                    format!("{}{}. ", indent, idx)
                } else {
                    format!("{}• ", indent)
                };
                current.push(Span::styled(bullet, Style::default().fg(colors::ACCENT)));
            }
            Event::End(Tag::Item) => flush(&mut current, &mut lines),

            Event::Text(t) => {
                let style = if link.is_some() {
                    Style::default()
                        .fg(colors::ACCENT_SOFT)
                        .add_modifier(Modifier::UNDERLINED)
                } else if bold {
                    Style::default()
                        .fg(colors::TEXT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::TEXT_DIM)
                };
                current.push(Span::styled(t.to_string(), style));
            }
            Event::Code(t) => {
                current.push(Span::styled(
                    format!(" {} ", t),
                    Style::default().fg(colors::ACCENT).bg(colors::CODE_BG),
                ));
            }

            Event::SoftBreak | Event::HardBreak => flush(&mut current, &mut lines),
            Event::End(Tag::Paragraph) => {
                flush(&mut current, &mut lines);
                lines.push(Line::from(Span::raw("")));
            }

            _ => {}
        }
    }
    flush(&mut current, &mut lines);
    while lines.last().is_some_and(|l| l.spans.iter().all(|s| s.content.is_empty())) {
        lines.pop();
    }
    lines
}

fn flush(current: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>) {
    if !current.is_empty() {
        lines.push(Line::from(std::mem::take(current)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn paragraphs_become_lines() {
        let lines = to_lines("First paragraph.\n\nSecond paragraph.");
        let text = text_of(&lines);
        assert!(text.contains(&"First paragraph.".to_string()));
        assert!(text.contains(&"Second paragraph.".to_string()));
    }

    #[test]
    fn links_keep_text_and_append_the_url() {
        let lines = to_lines("See [the docs](https://example.com).");
        let text = text_of(&lines).join("\n");
        assert!(text.contains("the docs"));
        assert!(text.contains("(https://example.com)"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(to_lines("").is_empty());
    }
}
