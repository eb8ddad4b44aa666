//! Sheet state mutated by commands

use sheetgrid_core::{Axis, AxisSizes, CellStorage};
use tracing::debug;

use crate::calculation::{recalculate, CalculationStats};
use crate::clipboard::Clipboard;
use crate::options::SheetOptions;

/// Everything a command can change: cells, row heights, column widths and
/// the clipboard
#[derive(Debug, Clone)]
pub struct Sheet {
    cells: CellStorage,
    rows: AxisSizes,
    columns: AxisSizes,
    clipboard: Clipboard,
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Sheet {
    /// Create a sheet with default options
    pub fn new() -> Self {
        Self::with_options(&SheetOptions::default())
    }

    /// Create a sheet from options
    pub fn with_options(options: &SheetOptions) -> Self {
        Self {
            cells: CellStorage::with_bounds(options.rows, options.columns),
            rows: AxisSizes::new(options.rows, options.default_row_height),
            columns: AxisSizes::new(options.columns as u32, options.default_column_width),
            clipboard: Clipboard::new(),
        }
    }

    /// Cell store
    pub fn cells(&self) -> &CellStorage {
        &self.cells
    }

    /// Mutable cell store
    pub fn cells_mut(&mut self) -> &mut CellStorage {
        &mut self.cells
    }

    /// Row heights
    pub fn rows(&self) -> &AxisSizes {
        &self.rows
    }

    /// Column widths
    pub fn columns(&self) -> &AxisSizes {
        &self.columns
    }

    /// Sizes along an axis
    pub fn axis(&self, axis: Axis) -> &AxisSizes {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisSizes {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.columns,
        }
    }

    /// Clipboard
    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Mutable clipboard
    pub fn clipboard_mut(&mut self) -> &mut Clipboard {
        &mut self.clipboard
    }

    /// Number of addressable lines along an axis
    pub fn line_count(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.cells.max_rows(),
            Axis::Column => self.cells.max_cols() as u32,
        }
    }

    /// Set the size of a row or column, returning `false` if it does not exist
    pub fn set_size(&mut self, axis: Axis, index: u32, size: f64) -> bool {
        self.axis_mut(axis).set_size(index, size)
    }

    /// Insert an empty row or column at `index`
    ///
    /// Later lines shift by one; the line pushed past the end of the grid is
    /// discarded. Returns the size of the discarded line, or `None` (and
    /// changes nothing) when `index` is outside the grid.
    pub fn insert_line(&mut self, axis: Axis, index: u32) -> Option<f64> {
        if index >= self.line_count(axis) {
            return None;
        }

        let dropped = self.axis_mut(axis).insert(index)?;
        match axis {
            Axis::Row => self.cells.shift_rows_down(index),
            Axis::Column => self.cells.shift_cols_right(index as u16),
        }
        debug!(%axis, index, "inserted line");
        Some(dropped)
    }

    /// Delete the row or column at `index`
    ///
    /// Later lines shift back by one, leaving the last line empty and
    /// default-sized. Returns the removed size, or `None` (and changes
    /// nothing) when `index` is outside the grid.
    pub fn delete_line(&mut self, axis: Axis, index: u32) -> Option<f64> {
        if index >= self.line_count(axis) {
            return None;
        }

        let size = self.axis_mut(axis).delete(index)?;
        match axis {
            Axis::Row => self.cells.shift_rows_up(index),
            Axis::Column => self.cells.shift_cols_left(index as u16),
        }
        debug!(%axis, index, "deleted line");
        Some(size)
    }

    /// Put sizes back as they were before [`insert_line`](Self::insert_line)
    pub(crate) fn undo_insert_size(&mut self, axis: Axis, index: u32, dropped: f64) {
        self.axis_mut(axis).undo_insert(index, dropped);
    }

    /// Put sizes back as they were before [`delete_line`](Self::delete_line)
    pub(crate) fn undo_delete_size(&mut self, axis: Axis, index: u32, removed: f64) {
        self.axis_mut(axis).undo_delete(index, removed);
    }

    /// Insert a row
    pub fn insert_row(&mut self, row: u32) -> bool {
        self.insert_line(Axis::Row, row).is_some()
    }

    /// Delete a row
    pub fn delete_row(&mut self, row: u32) -> bool {
        self.delete_line(Axis::Row, row).is_some()
    }

    /// Insert a column
    pub fn insert_column(&mut self, col: u16) -> bool {
        self.insert_line(Axis::Column, col as u32).is_some()
    }

    /// Delete a column
    pub fn delete_column(&mut self, col: u16) -> bool {
        self.delete_line(Axis::Column, col as u32).is_some()
    }

    /// Re-evaluate every formula
    pub fn recalculate(&mut self) -> CalculationStats {
        recalculate(&mut self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn small() -> Sheet {
        Sheet::with_options(&SheetOptions::new().with_size(10, 5))
    }

    #[test]
    fn test_insert_row_shifts_cells_and_sizes() {
        let mut sheet = small();
        sheet.cells_mut().set_cell_value(2, 0, "x");
        sheet.set_size(Axis::Row, 2, 50.0);

        assert!(sheet.insert_row(2));
        assert_eq!(sheet.cells().value_at(3, 0), "x");
        assert_eq!(sheet.rows().size(2), 30.0);
        assert_eq!(sheet.rows().size(3), 50.0);
        assert_eq!(sheet.rows().len(), sheet.line_count(Axis::Row));
    }

    #[test]
    fn test_delete_column_shifts_left() {
        let mut sheet = small();
        sheet.cells_mut().set_cell_value(0, 1, "gone");
        sheet.cells_mut().set_cell_value(0, 3, "kept");

        assert!(sheet.delete_column(1));
        assert_eq!(sheet.cells().value_at(0, 2), "kept");
        assert_eq!(sheet.cells().cell_count(), 1);
        assert_eq!(sheet.columns().len(), sheet.line_count(Axis::Column));
        assert_eq!(sheet.columns().size(4), 100.0);
    }

    #[test]
    fn test_out_of_range_structure_is_noop() {
        let mut sheet = small();
        sheet.cells_mut().set_cell_value(9, 4, "edge");
        assert!(!sheet.delete_row(10));
        assert!(!sheet.insert_column(5));
        assert_eq!(sheet.cells().value_at(9, 4), "edge");
        assert_eq!(sheet.rows().len(), 10);
    }

    #[test]
    fn test_insert_discards_last_row() {
        let mut sheet = small();
        sheet.cells_mut().set_cell_value(9, 0, "last");
        sheet.set_size(Axis::Row, 9, 80.0);
        assert_eq!(sheet.insert_line(Axis::Row, 0), Some(80.0));
        assert!(sheet.cells().is_empty());
    }

    #[test]
    fn test_last_row_stays_resizable_after_delete() {
        let mut sheet = small();
        assert!(sheet.delete_row(0));
        assert!(sheet.set_size(Axis::Row, 9, 45.0));
        assert_eq!(sheet.rows().size(9), 45.0);

        assert!(sheet.insert_row(0));
        assert!(sheet.insert_row(0));
        assert!(!sheet.set_size(Axis::Row, 10, 45.0));
        assert_eq!(sheet.rows().len(), 10);
    }
}
