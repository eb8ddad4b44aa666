//! # sheetgrid-core
//!
//! Core data structures for the sheetgrid spreadsheet engine.
//!
//! This crate provides the fundamental types used throughout sheetgrid:
//! - [`Cell`] - A single cell's display value, formula text and formatting
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and normalized ranges
//! - [`CellStorage`] - Sparse row/column store with structural shifts
//! - [`AxisSizes`] - Row heights and column widths
//! - [`SelectionManager`] - Cell, row, column and drag selection
//! - [`Aggregates`] - Sum/count/average/min/max over selected values
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid_core::CellStorage;
//!
//! let mut cells = CellStorage::new();
//! cells.set_cell_value(0, 0, "42");
//! cells.set_cell_value(1, 0, "   "); // whitespace is ignored
//!
//! assert_eq!(cells.value_at(0, 0), "42");
//! assert_eq!(cells.cell_count(), 1);
//! ```

pub mod aggregate;
pub mod axis;
pub mod cell;
pub mod error;
pub mod selection;
pub mod style;

// Re-exports for convenience
pub use aggregate::{Aggregates, NumericSource};
pub use axis::{Axis, AxisSizes};
pub use cell::{
    is_formula, looks_numeric, parse_number, Cell, CellAddress, CellRange, CellStorage, CellValue,
};
pub use error::{Error, Result};
pub use selection::{Selection, SelectionManager};
pub use style::{FontStyle, HorizontalAlignment};

/// Maximum number of rows in a sheet
pub const MAX_ROWS: u32 = 100_500;

/// Maximum number of columns in a sheet
pub const MAX_COLS: u16 = 5_001;

/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: f64 = 30.0;

/// Default column width in pixels
pub const DEFAULT_COLUMN_WIDTH: f64 = 100.0;

/// Default font size in pixels
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Leading character that marks cell text as a formula
pub const FORMULA_MARKER: char = '=';

/// Rows and columns covered by [`SelectionManager::select_all`]
pub const SELECT_ALL_LIMIT: u32 = 1_000;

/// Smallest row height reachable by an interactive resize
pub const MIN_ROW_HEIGHT: f64 = 20.0;

/// Smallest column width reachable by an interactive resize
pub const MIN_COLUMN_WIDTH: f64 = 40.0;
