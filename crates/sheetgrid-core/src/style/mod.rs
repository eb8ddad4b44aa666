//! Cell formatting types
//!
//! - [`FontStyle`] - Font size, bold and italic
//! - [`HorizontalAlignment`] - Horizontal text alignment

mod alignment;
mod font;

pub use alignment::HorizontalAlignment;
pub use font::FontStyle;
