//! Panel render: header, search input, detail area, status, and — while the
//! picker is open — the dropdown overlaying the top of the detail area.

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::theme::colors;
use crate::ui::widgets::{
    render_detail, render_dropdown, render_header, render_input, render_status,
};

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(colors::BG)), area);
    let regions = layout::compute(area);

    render_header(f, regions.header);
    render_input(f, &app.state.picker, regions.input);
    render_detail(f, &app.state, app.base_url(), regions.detail);
    render_status(
        f,
        regions.status,
        app.state.connected,
        app.state.models.len(),
    );

    if app.state.picker.open {
        let dd = layout::dropdown_rect(&regions, app.results().len());
        render_dropdown(f, app.results(), app.state.picker.highlighted, dd);
    }
}
