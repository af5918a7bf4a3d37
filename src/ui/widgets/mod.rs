//! TUI widgets: header, search input, dropdown, detail panel, status bar.

mod detail;
mod dropdown;
mod header;
mod input;
mod status;

pub use detail::render as render_detail;
pub use dropdown::render as render_dropdown;
pub use header::render as render_header;
pub use input::render as render_input;
pub use status::render as render_status;
