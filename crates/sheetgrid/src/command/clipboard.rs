use sheetgrid_core::{Cell, CellAddress, CellRange};

use super::{restore_cell, Command};
use crate::clipboard::Clipboard;
use crate::sheet::Sheet;

/// Copy the values of a range into the sheet's clipboard
///
/// Reading does not create cells. Copying does not touch the grid, so it is
/// never recorded in the undo history.
#[derive(Debug, Clone)]
pub struct CopyCommand {
    range: CellRange,
}

impl CopyCommand {
    /// Copy `range`
    pub fn new(range: CellRange) -> Self {
        Self { range }
    }
}

impl Command for CopyCommand {
    fn execute(&mut self, sheet: &mut Sheet) {
        let data = Clipboard::capture(sheet.cells(), self.range);
        sheet.clipboard_mut().set_data(data);
    }

    fn undo(&mut self, _sheet: &mut Sheet) {}

    fn label(&self) -> String {
        format!("copy {}", self.range)
    }

    fn records_history(&self) -> bool {
        false
    }
}

/// Write a block of values with its top-left corner at `origin`
///
/// Values past the grid edge are dropped. Pasted cells lose any formula
/// they had, and empty values do not create cells.
#[derive(Debug, Clone)]
pub struct PasteCommand {
    origin: CellAddress,
    data: Vec<Vec<String>>,
    previous: Vec<(CellAddress, Option<Cell>)>,
}

impl PasteCommand {
    /// Paste `data` at `origin`
    pub fn new(origin: CellAddress, data: Vec<Vec<String>>) -> Self {
        Self {
            origin,
            data,
            previous: Vec::new(),
        }
    }

    /// Paste the current clipboard contents at `origin`
    pub fn from_clipboard(sheet: &Sheet, origin: CellAddress) -> Self {
        Self::new(origin, sheet.clipboard().data())
    }

    /// Check if there is nothing to paste
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(Vec::is_empty)
    }
}

impl Command for PasteCommand {
    fn execute(&mut self, sheet: &mut Sheet) {
        let cells = sheet.cells_mut();
        let (max_rows, max_cols) = (cells.max_rows(), cells.max_cols());
        self.previous.clear();

        for (r, values) in self.data.iter().enumerate() {
            let Some(row) = u32::try_from(r)
                .ok()
                .and_then(|r| self.origin.row.checked_add(r))
                .filter(|&row| row < max_rows)
            else {
                break;
            };
            for (c, value) in values.iter().enumerate() {
                let Some(col) = u16::try_from(c)
                    .ok()
                    .and_then(|c| self.origin.col.checked_add(c))
                    .filter(|&col| col < max_cols)
                else {
                    break;
                };
                let existing = cells.get(row, col).cloned();
                if value.is_empty() && existing.is_none() {
                    continue;
                }
                self.previous.push((CellAddress::new(row, col), existing));
                let cell = cells.get_cell(row, col);
                cell.remove_formula();
                cell.set_value(value.as_str());
            }
        }

        sheet.recalculate();
    }

    fn undo(&mut self, sheet: &mut Sheet) {
        let cells = sheet.cells_mut();
        for (addr, previous) in self.previous.iter().rev() {
            restore_cell(cells, addr.row, addr.col, previous.as_ref());
        }
        sheet.recalculate();
    }

    fn label(&self) -> String {
        format!("paste at {}", self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SheetOptions;
    use pretty_assertions::assert_eq;

    fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_copy_then_paste() {
        let mut sheet = Sheet::new();
        sheet.cells_mut().set_cell_value(0, 0, "1");
        sheet.cells_mut().set_cell_value(0, 1, "2");

        CopyCommand::new(CellRange::from_indices(0, 0, 1, 1)).execute(&mut sheet);
        assert_eq!(sheet.clipboard().data(), strings(&[&["1", "2"], &["", ""]]));

        let mut paste = PasteCommand::from_clipboard(&sheet, CellAddress::new(4, 4));
        paste.execute(&mut sheet);
        assert_eq!(sheet.cells().value_at(4, 4), "1");
        assert_eq!(sheet.cells().value_at(4, 5), "2");
        // empty values do not create cells
        assert_eq!(sheet.cells().cell_count(), 4);
    }

    #[test]
    fn test_paste_clears_formula_and_undo_restores_it() {
        let mut sheet = Sheet::new();
        sheet.cells_mut().set_cell_value(0, 0, "5");
        sheet.cells_mut().get_cell(1, 0).set_formula("=A1");
        sheet.recalculate();

        let mut paste = PasteCommand::new(CellAddress::new(1, 0), strings(&[&["x"]]));
        paste.execute(&mut sheet);
        let cell = sheet.cells().get(1, 0).unwrap();
        assert!(!cell.has_formula());
        assert_eq!(cell.value(), "x");

        paste.undo(&mut sheet);
        let cell = sheet.cells().get(1, 0).unwrap();
        assert_eq!(cell.formula(), "=A1");
        assert_eq!(cell.value(), "5");
    }

    #[test]
    fn test_paste_clips_at_grid_edge() {
        let mut sheet = Sheet::with_options(&SheetOptions::new().with_size(3, 3));
        let mut paste = PasteCommand::new(CellAddress::new(2, 2), strings(&[&["a", "b"], &["c", "d"]]));
        paste.execute(&mut sheet);
        assert_eq!(sheet.cells().cell_count(), 1);
        assert_eq!(sheet.cells().value_at(2, 2), "a");

        paste.undo(&mut sheet);
        assert!(sheet.cells().is_empty());
    }

    #[test]
    fn test_copy_stays_out_of_history() {
        assert!(!CopyCommand::new(CellRange::from_indices(0, 0, 0, 0)).records_history());
    }
}
