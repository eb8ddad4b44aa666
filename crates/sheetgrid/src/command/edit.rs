use sheetgrid_core::{is_formula, Cell};

use super::{restore_cell, Command};
use crate::calculation::evaluate_text;
use crate::sheet::Sheet;

/// Set the text of one cell
///
/// Text starting with `=` becomes the cell's formula and is evaluated
/// immediately; anything else replaces the value and drops any formula.
/// Every formula in the sheet is recalculated afterwards, and again on undo.
#[derive(Debug, Clone)]
pub struct EditCellCommand {
    row: u32,
    col: u16,
    text: String,
    previous: Option<Cell>,
}

impl EditCellCommand {
    /// Create an edit of the cell at (`row`, `col`)
    pub fn new(row: u32, col: u16, text: impl Into<String>) -> Self {
        Self {
            row,
            col,
            text: text.into(),
            previous: None,
        }
    }

    /// The text being written
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Command for EditCellCommand {
    fn execute(&mut self, sheet: &mut Sheet) {
        let cells = sheet.cells_mut();
        self.previous = cells.get(self.row, self.col).cloned();

        if is_formula(&self.text) {
            let value = evaluate_text(&self.text, cells);
            let cell = cells.get_cell(self.row, self.col);
            cell.set_formula(self.text.as_str());
            cell.set_value(value);
        } else {
            let cell = cells.get_cell(self.row, self.col);
            cell.remove_formula();
            cell.set_value(self.text.as_str());
        }

        sheet.recalculate();
    }

    fn undo(&mut self, sheet: &mut Sheet) {
        restore_cell(sheet.cells_mut(), self.row, self.col, self.previous.as_ref());
        sheet.recalculate();
    }

    fn label(&self) -> String {
        format!("edit ({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_formula_edit_evaluates() {
        let mut sheet = Sheet::new();
        sheet.cells_mut().set_cell_value(0, 0, "3");
        sheet.cells_mut().set_cell_value(1, 0, "4");

        let mut cmd = EditCellCommand::new(2, 0, "=SUM(A1:A2)");
        cmd.execute(&mut sheet);

        let cell = sheet.cells().get(2, 0).unwrap();
        assert_eq!(cell.value(), "7");
        assert_eq!(cell.formula(), "=SUM(A1:A2)");
    }

    #[test]
    fn test_plain_edit_drops_formula() {
        let mut sheet = Sheet::new();
        EditCellCommand::new(0, 0, "=B1").execute(&mut sheet);
        EditCellCommand::new(0, 0, "plain").execute(&mut sheet);

        let cell = sheet.cells().get(0, 0).unwrap();
        assert!(!cell.has_formula());
        assert_eq!(cell.value(), "plain");
    }

    #[test]
    fn test_undo_removes_created_cell() {
        let mut sheet = Sheet::new();
        let mut cmd = EditCellCommand::new(5, 5, "x");
        cmd.execute(&mut sheet);
        cmd.undo(&mut sheet);
        assert!(!sheet.cells().contains(5, 5));
    }

    #[test]
    fn test_dependents_follow_edit_and_undo() {
        let mut sheet = Sheet::new();
        EditCellCommand::new(0, 0, "1").execute(&mut sheet);
        EditCellCommand::new(0, 1, "=A1").execute(&mut sheet);

        let mut cmd = EditCellCommand::new(0, 0, "9");
        cmd.execute(&mut sheet);
        assert_eq!(sheet.cells().value_at(0, 1), "9");

        cmd.undo(&mut sheet);
        assert_eq!(sheet.cells().value_at(0, 1), "1");
    }
}
