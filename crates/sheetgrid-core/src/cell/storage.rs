//! Sparse cell storage
//!
//! Cells live in a row-based `BTreeMap` and are created lazily on first access
//! through [`CellStorage::get_cell`]. Nothing is pre-allocated for the
//! 100 500 × 5 001 grid.

use std::collections::BTreeMap;

use tracing::debug;

use super::{Cell, CellAddress, CellRange};
use crate::axis::Axis;
use crate::{MAX_COLS, MAX_ROWS};

/// Sparse row-based storage for sheet cells
///
/// Structure: `BTreeMap<row_index, BTreeMap<col_index, Cell>>`
///
/// Rows whose column map becomes empty are dropped so that row iteration only
/// visits populated rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStorage {
    /// Row index → column map
    rows: BTreeMap<u32, BTreeMap<u16, Cell>>,
    /// Number of addressable rows
    max_rows: u32,
    /// Number of addressable columns
    max_cols: u16,
}

impl Default for CellStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl CellStorage {
    /// Create an empty store with the standard grid bounds
    pub fn new() -> Self {
        Self::with_bounds(MAX_ROWS, MAX_COLS)
    }

    /// Create an empty store with custom grid bounds
    pub fn with_bounds(max_rows: u32, max_cols: u16) -> Self {
        Self {
            rows: BTreeMap::new(),
            max_rows,
            max_cols,
        }
    }

    /// Number of addressable rows
    pub fn max_rows(&self) -> u32 {
        self.max_rows
    }

    /// Number of addressable columns
    pub fn max_cols(&self) -> u16 {
        self.max_cols
    }

    /// Get a cell, creating it if absent
    pub fn get_cell(&mut self, row: u32, col: u16) -> &mut Cell {
        self.rows
            .entry(row)
            .or_default()
            .entry(col)
            .or_insert_with(|| Cell::new(row, col))
    }

    /// Get a cell without creating it
    pub fn get(&self, row: u32, col: u16) -> Option<&Cell> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Get a mutable cell without creating it
    pub fn get_mut(&mut self, row: u32, col: u16) -> Option<&mut Cell> {
        self.rows.get_mut(&row).and_then(|r| r.get_mut(&col))
    }

    /// Check if a cell exists
    pub fn contains(&self, row: u32, col: u16) -> bool {
        self.get(row, col).is_some()
    }

    /// Get a cell's value, or `""` when the cell does not exist
    pub fn value_at(&self, row: u32, col: u16) -> &str {
        self.get(row, col).map(Cell::value).unwrap_or("")
    }

    /// Set a cell's value
    ///
    /// Empty or whitespace-only values are ignored entirely: no cell is
    /// created and an existing value is left untouched.
    pub fn set_cell_value(&mut self, row: u32, col: u16, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        self.get_cell(row, col).set_value(value);
    }

    /// Put a cell at its own coordinates, returning the cell it replaced
    pub fn insert(&mut self, cell: Cell) -> Option<Cell> {
        self.rows
            .entry(cell.row())
            .or_default()
            .insert(cell.col(), cell)
    }

    /// Remove a cell
    pub fn remove(&mut self, row: u32, col: u16) -> Option<Cell> {
        let row_map = self.rows.get_mut(&row)?;
        let removed = row_map.remove(&col);
        if row_map.is_empty() {
            self.rows.remove(&row);
        }
        removed
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Number of cells that have been created
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bounding rectangle of all created cells, or `None` if empty
    pub fn used_bounds(&self) -> Option<CellRange> {
        let min_row = *self.rows.keys().next()?;
        let max_row = *self.rows.keys().next_back()?;

        let mut min_col = u16::MAX;
        let mut max_col = 0u16;
        for row_data in self.rows.values() {
            if let Some(&col) = row_data.keys().next() {
                min_col = min_col.min(col);
            }
            if let Some(&col) = row_data.keys().next_back() {
                max_col = max_col.max(col);
            }
        }

        Some(CellRange::from_indices(min_row, min_col, max_row, max_col))
    }

    /// Iterate over all cells in row order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.rows.values().flat_map(|cols| cols.values())
    }

    /// Iterate over the created cells inside a range, row by row
    pub fn iter_range(&self, range: CellRange) -> impl Iterator<Item = &Cell> {
        self.rows
            .range(range.start.row..=range.end.row)
            .flat_map(move |(_, cols)| cols.range(range.start.col..=range.end.col))
            .map(|(_, cell)| cell)
    }

    /// Iterate over the cells of one row
    pub fn iter_row(&self, row: u32) -> impl Iterator<Item = &Cell> {
        self.rows.get(&row).into_iter().flat_map(|cols| cols.values())
    }

    /// Iterate over the cells of one column
    pub fn iter_column(&self, col: u16) -> impl Iterator<Item = &Cell> {
        self.rows.values().filter_map(move |cols| cols.get(&col))
    }

    /// Addresses of every cell carrying a formula
    pub fn formula_cells(&self) -> Vec<CellAddress> {
        self.iter()
            .filter(|cell| cell.has_formula())
            .map(|cell| CellAddress::new(cell.row(), cell.col()))
            .collect()
    }

    /// Copy every cell whose row (or column) index lies in `start..=end`
    pub fn span_snapshot(&self, axis: Axis, start: u32, end: u32) -> Vec<Cell> {
        if start > end {
            return Vec::new();
        }
        match axis {
            Axis::Row => self
                .rows
                .range(start..=end)
                .flat_map(|(_, cols)| cols.values().cloned())
                .collect(),
            Axis::Column => {
                let Some((start, end)) = column_span(start, end) else {
                    return Vec::new();
                };
                self.rows
                    .values()
                    .flat_map(|cols| cols.range(start..=end).map(|(_, cell)| cell.clone()))
                    .collect()
            }
        }
    }

    /// Remove every cell whose row (or column) index lies in `start..=end`
    pub fn clear_span(&mut self, axis: Axis, start: u32, end: u32) {
        if start > end {
            return;
        }
        match axis {
            Axis::Row => {
                let mut tail = self.rows.split_off(&start);
                if let Some(after) = end.checked_add(1) {
                    let mut kept = tail.split_off(&after);
                    self.rows.append(&mut kept);
                }
            }
            Axis::Column => {
                let Some((start, end)) = column_span(start, end) else {
                    return;
                };
                self.rows.retain(|_, cols| {
                    cols.retain(|&col, _| col < start || col > end);
                    !cols.is_empty()
                });
            }
        }
    }

    /// Replace the cells in `start..=end` with a snapshot from [`span_snapshot`](Self::span_snapshot)
    pub fn restore_span(&mut self, axis: Axis, start: u32, end: u32, cells: &[Cell]) {
        self.clear_span(axis, start, end);
        for cell in cells {
            self.insert(cell.clone());
        }
    }

    /// Move every row at or after `at` down by one, leaving row `at` empty
    ///
    /// Moved cells keep only their value. A row pushed past the last valid
    /// index is discarded.
    pub fn shift_rows_down(&mut self, at: u32) {
        let tail = self.rows.split_off(&at);
        let mut moved = 0usize;

        for (row, cols) in tail.into_iter().rev() {
            let target = row + 1;
            if target >= self.max_rows {
                continue;
            }
            let rebuilt: BTreeMap<u16, Cell> = cols
                .iter()
                .map(|(&col, cell)| (col, cell.relocated(target, col)))
                .collect();
            moved += rebuilt.len();
            self.rows.insert(target, rebuilt);
        }

        debug!(at, moved, "shifted rows down");
    }

    /// Remove row `at` and move every later row up by one
    pub fn shift_rows_up(&mut self, at: u32) {
        let mut tail = self.rows.split_off(&at);
        tail.remove(&at);
        let mut moved = 0usize;

        for (row, cols) in tail {
            let target = row - 1;
            let rebuilt: BTreeMap<u16, Cell> = cols
                .iter()
                .map(|(&col, cell)| (col, cell.relocated(target, col)))
                .collect();
            moved += rebuilt.len();
            self.rows.insert(target, rebuilt);
        }

        debug!(at, moved, "shifted rows up");
    }

    /// Move every column at or after `at` right by one, leaving column `at` empty
    ///
    /// A cell pushed past the last valid column is discarded.
    pub fn shift_cols_right(&mut self, at: u16) {
        let max_cols = self.max_cols;
        let mut moved = 0usize;

        for (&row, cols) in self.rows.iter_mut() {
            let tail = cols.split_off(&at);
            for (col, cell) in tail.into_iter().rev() {
                let Some(target) = col.checked_add(1).filter(|&c| c < max_cols) else {
                    continue;
                };
                cols.insert(target, cell.relocated(row, target));
                moved += 1;
            }
        }
        self.rows.retain(|_, cols| !cols.is_empty());

        debug!(at, moved, "shifted columns right");
    }

    /// Remove column `at` and move every later column left by one
    pub fn shift_cols_left(&mut self, at: u16) {
        let mut moved = 0usize;

        for (&row, cols) in self.rows.iter_mut() {
            let mut tail = cols.split_off(&at);
            tail.remove(&at);
            for (col, cell) in tail {
                let target = col - 1;
                cols.insert(target, cell.relocated(row, target));
                moved += 1;
            }
        }
        self.rows.retain(|_, cols| !cols.is_empty());

        debug!(at, moved, "shifted columns left");
    }
}

/// Clamp a `u32` span to column indices, `None` if it lies past `u16::MAX`
fn column_span(start: u32, end: u32) -> Option<(u16, u16)> {
    let start = u16::try_from(start).ok()?;
    let end = u16::try_from(end).unwrap_or(u16::MAX);
    Some((start, end))
}
