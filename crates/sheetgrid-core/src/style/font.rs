//! Font style types

use crate::DEFAULT_FONT_SIZE;

/// Font style settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontStyle {
    /// Font size in pixels
    pub size: f64,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_FONT_SIZE,
            bold: false,
            italic: false,
        }
    }
}

impl FontStyle {
    /// Create a new default font
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font size
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}
