//! Services: detail-panel number formatting.

mod format;

pub use format::format_price;
pub use format::format_tokens;
