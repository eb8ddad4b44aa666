use sheetgrid_core::{Cell, HorizontalAlignment};

use super::{restore_cell, Command};
use crate::sheet::Sheet;

/// A single formatting attribute to set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatChange {
    /// Font size in pixels
    FontSize(f64),
    /// Bold on or off
    Bold(bool),
    /// Italic on or off
    Italic(bool),
    /// Explicit alignment, or `None` to fall back to inference
    Alignment(Option<HorizontalAlignment>),
}

impl FormatChange {
    fn apply(self, cell: &mut Cell) {
        match self {
            Self::FontSize(size) => cell.set_font_size(size),
            Self::Bold(bold) => cell.set_bold(bold),
            Self::Italic(italic) => cell.set_italic(italic),
            Self::Alignment(alignment) => cell.set_alignment(alignment),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::FontSize(_) => "font size",
            Self::Bold(_) => "bold",
            Self::Italic(_) => "italic",
            Self::Alignment(_) => "alignment",
        }
    }
}

/// Change one formatting attribute of one cell
///
/// Formatting never affects values, so no recalculation happens.
#[derive(Debug, Clone)]
pub struct FormatCommand {
    row: u32,
    col: u16,
    change: FormatChange,
    previous: Option<Cell>,
}

impl FormatCommand {
    /// Create a format change for the cell at (`row`, `col`)
    pub fn new(row: u32, col: u16, change: FormatChange) -> Self {
        Self {
            row,
            col,
            change,
            previous: None,
        }
    }

    /// Set the font size
    pub fn font_size(row: u32, col: u16, size: f64) -> Self {
        Self::new(row, col, FormatChange::FontSize(size))
    }

    /// Toggle bold
    pub fn bold(row: u32, col: u16, bold: bool) -> Self {
        Self::new(row, col, FormatChange::Bold(bold))
    }

    /// Toggle italic
    pub fn italic(row: u32, col: u16, italic: bool) -> Self {
        Self::new(row, col, FormatChange::Italic(italic))
    }

    /// Set the alignment
    pub fn alignment(row: u32, col: u16, alignment: Option<HorizontalAlignment>) -> Self {
        Self::new(row, col, FormatChange::Alignment(alignment))
    }
}

impl Command for FormatCommand {
    fn execute(&mut self, sheet: &mut Sheet) {
        let cells = sheet.cells_mut();
        self.previous = cells.get(self.row, self.col).cloned();
        self.change.apply(cells.get_cell(self.row, self.col));
    }

    fn undo(&mut self, sheet: &mut Sheet) {
        restore_cell(sheet.cells_mut(), self.row, self.col, self.previous.as_ref());
    }

    fn label(&self) -> String {
        format!("{} ({}, {})", self.change.name(), self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_font_size_undo_restores_previous() {
        let mut sheet = Sheet::new();
        sheet.cells_mut().get_cell(0, 0).set_font_size(20.0);

        let mut cmd = FormatCommand::font_size(0, 0, 28.0);
        cmd.execute(&mut sheet);
        assert_eq!(sheet.cells().get(0, 0).unwrap().font_size(), 28.0);

        cmd.undo(&mut sheet);
        assert_eq!(sheet.cells().get(0, 0).unwrap().font_size(), 20.0);
    }

    #[test]
    fn test_alignment_and_styles() {
        let mut sheet = Sheet::new();
        FormatCommand::bold(1, 1, true).execute(&mut sheet);
        FormatCommand::italic(1, 1, true).execute(&mut sheet);
        FormatCommand::alignment(1, 1, Some(HorizontalAlignment::Center)).execute(&mut sheet);

        let cell = sheet.cells().get(1, 1).unwrap();
        assert!(cell.is_bold());
        assert!(cell.is_italic());
        assert_eq!(cell.effective_alignment(), HorizontalAlignment::Center);
    }

    #[test]
    fn test_undo_on_fresh_cell_removes_it() {
        let mut sheet = Sheet::new();
        let mut cmd = FormatCommand::bold(3, 3, true);
        cmd.execute(&mut sheet);
        cmd.undo(&mut sheet);
        assert!(!sheet.cells().contains(3, 3));
    }
}
