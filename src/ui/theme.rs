//! Theme: VS Code-ish dark panel palette.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Panel canvas.
    pub const BG: Color = Color::Rgb(0x1b, 0x1f, 0x26);
    /// Input box, dropdown, status.
    pub const ELEVATED: Color = Color::Rgb(0x15, 0x19, 0x1f);
    /// Borders / separators.
    pub const BORDER: Color = Color::Rgb(0x2d, 0x34, 0x3e);
    /// Primary accent (labels, selection bar).
    pub const ACCENT: Color = Color::Rgb(0x6b, 0xbc, 0xff);
    /// Links, section headings in the detail panel.
    pub const ACCENT_SOFT: Color = Color::Rgb(0x99, 0xd4, 0xff);
    /// Fuzzy-match highlight background (find-match style).
    pub const MATCH_BG: Color = Color::Rgb(0x51, 0x3d, 0x1f);
    /// Favorite star.
    pub const STAR: Color = Color::Rgb(0xe8, 0xc5, 0x4a);
    /// Body text.
    pub const TEXT: Color = Color::Rgb(0xf2, 0xf4, 0xf8);
    /// Secondary text.
    pub const TEXT_DIM: Color = Color::Rgb(0xbc, 0xc5, 0xd0);
    /// Hints.
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
    /// Inline code in descriptions.
    pub const CODE_BG: Color = Color::Rgb(0x1e, 0x24, 0x2e);
}

pub const HEADER_HEIGHT: u16 = 2;
/// Label row + bordered input line.
pub const INPUT_HEIGHT: u16 = 4;
pub const STATUS_HEIGHT: u16 = 1;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 2;
/// Dropdown never grows past this many rows.
pub const DROPDOWN_MAX_ROWS: u16 = 10;
