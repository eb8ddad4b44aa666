//! The [`Cell`] type

use crate::style::{FontStyle, HorizontalAlignment};
use crate::FORMULA_MARKER;

use super::value::CellValue;

/// Check if text looks like a formula
///
/// Text is a formula when it starts with `=` and has something after it; a
/// lone `"="` is plain text.
pub fn is_formula(text: &str) -> bool {
    text.len() > FORMULA_MARKER.len_utf8() && text.starts_with(FORMULA_MARKER)
}

/// A single cell: display value, formula text and formatting
///
/// `row` and `col` always equal the cell's position in the store that owns it.
/// Structural shifts never move a `Cell`; they build a new one at the target
/// coordinate with [`Cell::relocated`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    row: u32,
    col: u16,
    value: String,
    formula: String,
    font: FontStyle,
    alignment: Option<HorizontalAlignment>,
}

impl Cell {
    /// Create an empty cell at a position
    pub fn new(row: u32, col: u16) -> Self {
        Self {
            row,
            col,
            value: String::new(),
            formula: String::new(),
            font: FontStyle::default(),
            alignment: None,
        }
    }

    /// Row index
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column index
    pub fn col(&self) -> u16 {
        self.col
    }

    /// Display value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Typed view of the display value
    pub fn typed_value(&self) -> CellValue<'_> {
        CellValue::classify(&self.value)
    }

    /// Set the display value
    ///
    /// The formula, if any, is left in place; recalculation overwrites the
    /// value of formula cells.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Raw formula text including the leading `=`, empty when none
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Check if the cell carries a formula
    pub fn has_formula(&self) -> bool {
        !self.formula.is_empty()
    }

    /// Store a formula
    ///
    /// The value is set to the formula text until the next evaluation.
    pub fn set_formula(&mut self, formula: impl Into<String>) {
        self.formula = formula.into();
        self.value = self.formula.clone();
    }

    /// Drop the formula and the value derived from it
    pub fn remove_formula(&mut self) {
        self.formula.clear();
        self.value.clear();
    }

    /// Text an editor should show: the formula when present, else the value
    pub fn editor_text(&self) -> &str {
        if self.has_formula() {
            &self.formula
        } else {
            &self.value
        }
    }

    /// Font settings
    pub fn font(&self) -> &FontStyle {
        &self.font
    }

    /// Font size in pixels
    pub fn font_size(&self) -> f64 {
        self.font.size
    }

    /// Set font size
    pub fn set_font_size(&mut self, size: f64) {
        self.font.size = size;
    }

    /// Bold flag
    pub fn is_bold(&self) -> bool {
        self.font.bold
    }

    /// Set bold
    pub fn set_bold(&mut self, bold: bool) {
        self.font.bold = bold;
    }

    /// Italic flag
    pub fn is_italic(&self) -> bool {
        self.font.italic
    }

    /// Set italic
    pub fn set_italic(&mut self, italic: bool) {
        self.font.italic = italic;
    }

    /// Explicit alignment override
    pub fn alignment(&self) -> Option<HorizontalAlignment> {
        self.alignment
    }

    /// Set or clear the alignment override
    pub fn set_alignment(&mut self, alignment: Option<HorizontalAlignment>) {
        self.alignment = alignment;
    }

    /// Alignment used for display: the override, or one inferred from the value
    pub fn effective_alignment(&self) -> HorizontalAlignment {
        self.alignment
            .unwrap_or_else(|| HorizontalAlignment::infer(&self.value))
    }

    /// Reset content and formatting, keeping the position
    pub fn clear(&mut self) {
        *self = Cell::new(self.row, self.col);
    }

    /// Check if the cell holds nothing but defaults
    pub fn is_blank(&self) -> bool {
        self.value.is_empty()
            && self.formula.is_empty()
            && self.font == FontStyle::default()
            && self.alignment.is_none()
    }

    /// A fresh cell at another position carrying only this cell's value
    ///
    /// Formula and formatting do not travel with structural shifts.
    pub fn relocated(&self, row: u32, col: u16) -> Cell {
        let mut cell = Cell::new(row, col);
        cell.value = self.value.clone();
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_formula() {
        assert!(is_formula("=A1"));
        assert!(is_formula("=SUM(A1:A3)"));
        assert!(!is_formula("="));
        assert!(!is_formula("A1"));
        assert!(!is_formula(""));
        assert!(!is_formula(" =A1"));
    }

    #[test]
    fn test_defaults() {
        let cell = Cell::new(3, 4);
        assert_eq!((cell.row(), cell.col()), (3, 4));
        assert_eq!(cell.value(), "");
        assert_eq!(cell.formula(), "");
        assert_eq!(cell.font_size(), 14.0);
        assert!(!cell.is_bold());
        assert!(!cell.is_italic());
        assert_eq!(cell.alignment(), None);
        assert!(cell.is_blank());
    }

    #[test]
    fn test_formula_lifecycle() {
        let mut cell = Cell::new(0, 0);
        cell.set_formula("=A2");
        assert!(cell.has_formula());
        assert_eq!(cell.value(), "=A2");

        // set_value keeps the formula
        cell.set_value("5");
        assert_eq!(cell.formula(), "=A2");
        assert_eq!(cell.editor_text(), "=A2");

        cell.remove_formula();
        assert!(!cell.has_formula());
        assert_eq!(cell.value(), "");
        assert_eq!(cell.editor_text(), "");
    }

    #[test]
    fn test_effective_alignment() {
        let mut cell = Cell::new(0, 0);
        cell.set_value("1,000");
        assert_eq!(cell.effective_alignment(), HorizontalAlignment::Right);
        cell.set_value("text");
        assert_eq!(cell.effective_alignment(), HorizontalAlignment::Left);
        cell.set_alignment(Some(HorizontalAlignment::Center));
        assert_eq!(cell.effective_alignment(), HorizontalAlignment::Center);
    }

    #[test]
    fn test_relocated_drops_formatting() {
        let mut cell = Cell::new(1, 1);
        cell.set_formula("=A1");
        cell.set_value("9");
        cell.set_bold(true);
        cell.set_font_size(20.0);

        let moved = cell.relocated(2, 1);
        assert_eq!((moved.row(), moved.col()), (2, 1));
        assert_eq!(moved.value(), "9");
        assert!(!moved.has_formula());
        assert!(!moved.is_bold());
        assert_eq!(moved.font_size(), 14.0);
    }

    #[test]
    fn test_clear_keeps_position() {
        let mut cell = Cell::new(5, 6);
        cell.set_value("x");
        cell.set_italic(true);
        cell.clear();
        assert_eq!(cell, Cell::new(5, 6));
    }
}
