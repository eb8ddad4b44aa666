//! Sheet configuration

use sheetgrid_core::{
    DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT, MAX_COLS, MAX_ROWS, SELECT_ALL_LIMIT,
};

/// Options for creating a [`Spreadsheet`](crate::Spreadsheet)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetOptions {
    /// Number of rows (default: 100 500)
    pub rows: u32,
    /// Number of columns (default: 5 001)
    pub columns: u16,
    /// Height of a new row in pixels (default: 30)
    pub default_row_height: f64,
    /// Width of a new column in pixels (default: 100)
    pub default_column_width: f64,
    /// Rows and columns covered by select-all (default: 1000)
    pub select_all_limit: u32,
    /// Maximum number of undo entries kept, `None` for unlimited
    pub history_limit: Option<usize>,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            rows: MAX_ROWS,
            columns: MAX_COLS,
            default_row_height: DEFAULT_ROW_HEIGHT,
            default_column_width: DEFAULT_COLUMN_WIDTH,
            select_all_limit: SELECT_ALL_LIMIT,
            history_limit: None,
        }
    }
}

impl SheetOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid size
    pub fn with_size(mut self, rows: u32, columns: u16) -> Self {
        self.rows = rows.max(1);
        self.columns = columns.max(1);
        self
    }

    /// Set the default row height and column width
    pub fn with_default_sizes(mut self, row_height: f64, column_width: f64) -> Self {
        self.default_row_height = row_height;
        self.default_column_width = column_width;
        self
    }

    /// Set the select-all limit
    pub fn with_select_all_limit(mut self, limit: u32) -> Self {
        self.select_all_limit = limit;
        self
    }

    /// Cap the undo history
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}
