use sheetgrid_core::{Axis, Cell};

use super::Command;
use crate::sheet::Sheet;

/// Cells from `index` to the end of the axis, captured before a shift
#[derive(Debug, Clone, Default)]
struct TailSnapshot {
    start: u32,
    end: u32,
    cells: Vec<Cell>,
}

impl TailSnapshot {
    fn capture(sheet: &Sheet, axis: Axis, index: u32) -> Self {
        let end = sheet.line_count(axis).saturating_sub(1);
        Self {
            start: index,
            end,
            cells: sheet.cells().span_snapshot(axis, index, end),
        }
    }

    fn restore(&self, sheet: &mut Sheet, axis: Axis) {
        sheet
            .cells_mut()
            .restore_span(axis, self.start, self.end, &self.cells);
    }
}

/// Insert an empty row or column
///
/// Undo puts back every shifted cell exactly as it was, including formulas
/// and formatting that the shift itself does not carry.
#[derive(Debug, Clone)]
pub struct InsertLineCommand {
    axis: Axis,
    index: u32,
    /// Size of the line pushed off the end, once applied
    dropped_size: Option<f64>,
    tail: TailSnapshot,
}

impl InsertLineCommand {
    /// Insert along `axis` at `index`
    pub fn new(axis: Axis, index: u32) -> Self {
        Self {
            axis,
            index,
            dropped_size: None,
            tail: TailSnapshot::default(),
        }
    }

    /// Insert a row
    pub fn row(row: u32) -> Self {
        Self::new(Axis::Row, row)
    }

    /// Insert a column
    pub fn column(col: u16) -> Self {
        Self::new(Axis::Column, col as u32)
    }
}

impl Command for InsertLineCommand {
    fn execute(&mut self, sheet: &mut Sheet) {
        self.tail = TailSnapshot::capture(sheet, self.axis, self.index);
        self.dropped_size = sheet.insert_line(self.axis, self.index);
        if self.dropped_size.is_some() {
            sheet.recalculate();
        }
    }

    fn undo(&mut self, sheet: &mut Sheet) {
        let Some(dropped) = self.dropped_size.take() else {
            return;
        };
        sheet.undo_insert_size(self.axis, self.index, dropped);
        self.tail.restore(sheet, self.axis);
        sheet.recalculate();
    }

    fn label(&self) -> String {
        format!("insert {} {}", self.axis, self.index)
    }
}

/// Delete a row or column
#[derive(Debug, Clone)]
pub struct DeleteLineCommand {
    axis: Axis,
    index: u32,
    /// Size of the deleted line, once applied
    removed_size: Option<f64>,
    tail: TailSnapshot,
}

impl DeleteLineCommand {
    /// Delete along `axis` at `index`
    pub fn new(axis: Axis, index: u32) -> Self {
        Self {
            axis,
            index,
            removed_size: None,
            tail: TailSnapshot::default(),
        }
    }

    /// Delete a row
    pub fn row(row: u32) -> Self {
        Self::new(Axis::Row, row)
    }

    /// Delete a column
    pub fn column(col: u16) -> Self {
        Self::new(Axis::Column, col as u32)
    }
}

impl Command for DeleteLineCommand {
    fn execute(&mut self, sheet: &mut Sheet) {
        self.tail = TailSnapshot::capture(sheet, self.axis, self.index);
        self.removed_size = sheet.delete_line(self.axis, self.index);
        if self.removed_size.is_some() {
            sheet.recalculate();
        }
    }

    fn undo(&mut self, sheet: &mut Sheet) {
        let Some(size) = self.removed_size.take() else {
            return;
        };
        sheet.undo_delete_size(self.axis, self.index, size);
        self.tail.restore(sheet, self.axis);
        sheet.recalculate();
    }

    fn label(&self) -> String {
        format!("delete {} {}", self.axis, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SheetOptions;
    use pretty_assertions::assert_eq;

    fn sheet() -> Sheet {
        let mut sheet = Sheet::with_options(&SheetOptions::new().with_size(20, 10));
        for row in 0..8u32 {
            sheet
                .cells_mut()
                .set_cell_value(row, 0, &format!("r{row}"));
        }
        sheet
    }

    #[test]
    fn test_insert_row_then_undo_is_exact() {
        let mut sheet = sheet();
        sheet.cells_mut().get_cell(6, 1).set_bold(true);
        let before = sheet.cells().clone();

        let mut cmd = InsertLineCommand::row(5);
        cmd.execute(&mut sheet);
        assert_eq!(sheet.cells().value_at(5, 0), "");
        assert_eq!(sheet.cells().value_at(6, 0), "r5");

        cmd.undo(&mut sheet);
        assert_eq!(sheet.cells(), &before);
        assert_eq!(sheet.rows().len(), 20);
    }

    #[test]
    fn test_delete_column_then_undo_is_exact() {
        let mut sheet = sheet();
        sheet.cells_mut().set_cell_value(0, 3, "d");
        sheet.set_size(Axis::Column, 0, 42.0);
        let before = sheet.cells().clone();

        let mut cmd = DeleteLineCommand::column(0);
        cmd.execute(&mut sheet);
        assert_eq!(sheet.cells().value_at(0, 2), "d");
        assert_eq!(sheet.columns().size(0), 100.0);

        cmd.undo(&mut sheet);
        assert_eq!(sheet.cells(), &before);
        assert_eq!(sheet.columns().size(0), 42.0);
        assert_eq!(sheet.columns().len(), 10);
    }

    #[test]
    fn test_sizes_track_line_count_through_undo() {
        let mut sheet = sheet();
        sheet.set_size(Axis::Row, 19, 75.0);
        sheet.set_size(Axis::Row, 3, 12.0);
        let before = sheet.rows().clone();
        let count = sheet.line_count(Axis::Row);

        let mut insert = InsertLineCommand::row(3);
        insert.execute(&mut sheet);
        assert_eq!(sheet.rows().len(), count);
        assert_eq!(sheet.rows().size(4), 12.0);
        insert.undo(&mut sheet);
        assert_eq!(sheet.rows(), &before);

        let mut delete = DeleteLineCommand::row(3);
        delete.execute(&mut sheet);
        assert_eq!(sheet.rows().len(), count);
        assert_eq!(sheet.rows().size(19), 30.0);
        delete.undo(&mut sheet);
        assert_eq!(sheet.rows(), &before);
    }

    #[test]
    fn test_out_of_range_undo_is_noop() {
        let mut sheet = sheet();
        let before = sheet.cells().clone();
        let mut cmd = DeleteLineCommand::row(20);
        cmd.execute(&mut sheet);
        cmd.undo(&mut sheet);
        assert_eq!(sheet.cells(), &before);
        assert_eq!(sheet.rows().len(), 20);
    }
}
