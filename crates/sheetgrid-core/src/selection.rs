//! Selection state
//!
//! A [`SelectionManager`] holds exactly one [`Selection`] at rest. While a
//! drag is in progress it may also collect a shadow set of rows or columns
//! (a drag that started on a header); [`SelectionManager::end_drag`] resolves
//! the drag into a single canonical selection.

use indexmap::IndexSet;
use tracing::warn;

use crate::cell::{CellAddress, CellRange, CellStorage};
use crate::{MAX_COLS, MAX_ROWS, SELECT_ALL_LIMIT};

/// Rectangle selected by [`SelectionManager::select_all_with_data`] on an empty sheet
const EMPTY_SHEET_SELECTION: u32 = 10;

/// The current selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Empty,
    /// A single active cell
    Cell(CellAddress),
    /// Whole rows, in the order they were selected
    Rows(IndexSet<u32>),
    /// Whole columns, in the order they were selected
    Columns(IndexSet<u16>),
    /// A drag in progress from `anchor` to `focus`
    Dragging {
        anchor: CellAddress,
        focus: CellAddress,
    },
    /// A finished rectangular selection
    Range(CellRange),
}

impl Selection {
    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }
}

/// Tracks the selection of one sheet
#[derive(Debug, Clone)]
pub struct SelectionManager {
    state: Selection,
    /// Rows collected by a header drag in progress
    drag_rows: IndexSet<u32>,
    /// Columns collected by a header drag in progress
    drag_cols: IndexSet<u16>,
    max_rows: u32,
    max_cols: u16,
    select_all_limit: u32,
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionManager {
    /// Create a manager for the standard grid size
    pub fn new() -> Self {
        Self::with_limits(MAX_ROWS, MAX_COLS, SELECT_ALL_LIMIT)
    }

    /// Create a manager for a custom grid size
    pub fn with_limits(max_rows: u32, max_cols: u16, select_all_limit: u32) -> Self {
        Self {
            state: Selection::Empty,
            drag_rows: IndexSet::new(),
            drag_cols: IndexSet::new(),
            max_rows,
            max_cols,
            select_all_limit,
        }
    }

    /// The current selection
    pub fn state(&self) -> &Selection {
        &self.state
    }

    /// Clear everything
    pub fn clear(&mut self) {
        self.state = Selection::Empty;
        self.drag_rows.clear();
        self.drag_cols.clear();
    }

    /// Select a single cell
    pub fn select_cell(&mut self, row: u32, col: u16) {
        self.clear();
        self.state = Selection::Cell(CellAddress::new(row, col));
    }

    /// Select one whole row
    pub fn select_row(&mut self, row: u32) {
        self.clear();
        self.state = Selection::Rows(IndexSet::from([row]));
    }

    /// Select one whole column
    pub fn select_column(&mut self, col: u16) {
        self.clear();
        self.state = Selection::Columns(IndexSet::from([col]));
    }

    /// Select a contiguous block of rows (either order)
    pub fn select_rows(&mut self, start: u32, end: u32) {
        self.clear();
        self.state = Selection::Rows((start.min(end)..=start.max(end)).collect());
    }

    /// Select a contiguous block of columns (either order)
    pub fn select_columns(&mut self, start: u16, end: u16) {
        self.clear();
        self.state = Selection::Columns((start.min(end)..=start.max(end)).collect());
    }

    /// Select a rectangle given any two corners
    pub fn select_range(&mut self, start_row: u32, start_col: u16, end_row: u32, end_col: u16) {
        self.clear();
        self.state = Selection::Range(CellRange::from_indices(
            start_row, start_col, end_row, end_col,
        ));
    }

    /// Select the top-left block of the sheet, capped at the select-all limit
    pub fn select_all(&mut self) {
        let rows = self.select_all_limit.min(self.max_rows).max(1);
        let cols = self.select_all_limit.min(self.max_cols as u32).max(1) as u16;
        self.select_range(0, 0, rows - 1, cols - 1);
    }

    /// Select the bounding rectangle of every populated cell
    ///
    /// An empty sheet selects a 10 × 10 block at the origin.
    pub fn select_all_with_data(&mut self, cells: &CellStorage) {
        match cells.used_bounds() {
            Some(bounds) => {
                self.clear();
                self.state = Selection::Range(bounds);
            }
            None => {
                let last = EMPTY_SHEET_SELECTION - 1;
                self.select_range(0, 0, last, last as u16);
            }
        }
    }

    /// Select every addressable cell
    pub fn select_entire_grid(&mut self) {
        self.select_range(0, 0, self.max_rows - 1, self.max_cols - 1);
        warn!(
            rows = self.max_rows,
            cols = self.max_cols,
            "entire grid selected, operations over the selection may be slow"
        );
    }

    /// Begin a drag at a cell
    pub fn start_drag(&mut self, row: u32, col: u16) {
        self.clear();
        let at = CellAddress::new(row, col);
        self.state = Selection::Dragging {
            anchor: at,
            focus: at,
        };
    }

    /// Move the focus of the drag in progress
    ///
    /// Ignored when no drag is in progress.
    pub fn update_drag(&mut self, row: u32, col: u16) {
        if let Selection::Dragging { focus, .. } = &mut self.state {
            *focus = CellAddress::new(row, col);
        }
    }

    /// Finish the drag in progress
    ///
    /// Rows or columns collected during a header drag win over the rectangle.
    pub fn end_drag(&mut self) {
        let Selection::Dragging { anchor, focus } = self.state else {
            return;
        };

        self.state = if !self.drag_rows.is_empty() {
            Selection::Rows(std::mem::take(&mut self.drag_rows))
        } else if !self.drag_cols.is_empty() {
            Selection::Columns(std::mem::take(&mut self.drag_cols))
        } else {
            Selection::Range(CellRange::new(anchor, focus))
        };
        self.drag_rows.clear();
        self.drag_cols.clear();
    }

    /// Check if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, Selection::Dragging { .. })
    }

    /// Check if the drag in progress has collected whole rows or columns
    pub fn is_header_drag(&self) -> bool {
        self.is_dragging() && !(self.drag_rows.is_empty() && self.drag_cols.is_empty())
    }

    /// Add a row to the row selection
    pub fn add_selected_row(&mut self, row: u32) {
        match &mut self.state {
            Selection::Rows(rows) => {
                rows.insert(row);
            }
            Selection::Dragging { .. } => {
                self.drag_rows.insert(row);
            }
            _ => self.select_row(row),
        }
    }

    /// Add a column to the column selection
    pub fn add_selected_column(&mut self, col: u16) {
        match &mut self.state {
            Selection::Columns(cols) => {
                cols.insert(col);
            }
            Selection::Dragging { .. } => {
                self.drag_cols.insert(col);
            }
            _ => self.select_column(col),
        }
    }

    /// Remove a row from the row selection
    pub fn remove_selected_row(&mut self, row: u32) {
        match &mut self.state {
            Selection::Rows(rows) => {
                rows.shift_remove(&row);
                if rows.is_empty() {
                    self.state = Selection::Empty;
                }
            }
            Selection::Dragging { .. } => {
                self.drag_rows.shift_remove(&row);
            }
            _ => {}
        }
    }

    /// Remove a column from the column selection
    pub fn remove_selected_column(&mut self, col: u16) {
        match &mut self.state {
            Selection::Columns(cols) => {
                cols.shift_remove(&col);
                if cols.is_empty() {
                    self.state = Selection::Empty;
                }
            }
            Selection::Dragging { .. } => {
                self.drag_cols.shift_remove(&col);
            }
            _ => {}
        }
    }

    /// Replace the row selection
    pub fn set_selected_rows(&mut self, rows: impl IntoIterator<Item = u32>) {
        let rows: IndexSet<u32> = rows.into_iter().collect();
        if self.is_dragging() {
            self.drag_rows = rows;
        } else if rows.is_empty() {
            self.clear_selected_rows();
        } else {
            self.clear();
            self.state = Selection::Rows(rows);
        }
    }

    /// Replace the column selection
    pub fn set_selected_columns(&mut self, cols: impl IntoIterator<Item = u16>) {
        let cols: IndexSet<u16> = cols.into_iter().collect();
        if self.is_dragging() {
            self.drag_cols = cols;
        } else if cols.is_empty() {
            self.clear_selected_columns();
        } else {
            self.clear();
            self.state = Selection::Columns(cols);
        }
    }

    /// Drop the row selection, leaving other kinds alone
    pub fn clear_selected_rows(&mut self) {
        self.drag_rows.clear();
        if matches!(self.state, Selection::Rows(_)) {
            self.state = Selection::Empty;
        }
    }

    /// Drop the column selection, leaving other kinds alone
    pub fn clear_selected_columns(&mut self) {
        self.drag_cols.clear();
        if matches!(self.state, Selection::Columns(_)) {
            self.state = Selection::Empty;
        }
    }

    /// The single selected cell, if that is the current selection
    pub fn selected_cell(&self) -> Option<CellAddress> {
        match self.state {
            Selection::Cell(addr) => Some(addr),
            _ => None,
        }
    }

    /// First selected row
    pub fn selected_row(&self) -> Option<u32> {
        self.row_set().and_then(|rows| rows.first().copied())
    }

    /// First selected column
    pub fn selected_col(&self) -> Option<u16> {
        self.col_set().and_then(|cols| cols.first().copied())
    }

    /// Copy of the selected rows, in selection order
    pub fn selected_rows(&self) -> Vec<u32> {
        self.row_set()
            .map(|rows| rows.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Copy of the selected columns, in selection order
    pub fn selected_columns(&self) -> Vec<u16> {
        self.col_set()
            .map(|cols| cols.iter().copied().collect())
            .unwrap_or_default()
    }

    /// The rectangle of the drag in progress or of the finished range
    pub fn drag_rect(&self) -> Option<CellRange> {
        match self.state {
            Selection::Dragging { anchor, focus } => Some(CellRange::new(anchor, focus)),
            Selection::Range(range) => Some(range),
            _ => None,
        }
    }

    /// The cell rectangle covered by a cell, drag or range selection
    pub fn selected_range(&self) -> Option<CellRange> {
        match self.state {
            Selection::Cell(addr) => Some(CellRange::single(addr)),
            _ => self.drag_rect(),
        }
    }

    fn row_set(&self) -> Option<&IndexSet<u32>> {
        match &self.state {
            Selection::Rows(rows) => Some(rows),
            Selection::Dragging { .. } if !self.drag_rows.is_empty() => Some(&self.drag_rows),
            _ => None,
        }
    }

    fn col_set(&self) -> Option<&IndexSet<u16>> {
        match &self.state {
            Selection::Columns(cols) => Some(cols),
            Selection::Dragging { .. } if !self.drag_cols.is_empty() => Some(&self.drag_cols),
            _ => None,
        }
    }
}
