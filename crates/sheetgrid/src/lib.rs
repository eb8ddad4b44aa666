//! # sheetgrid
//!
//! An in-memory spreadsheet engine: a sparse grid of text cells with
//! formatting, a small formula language, selection, and undoable commands.
//!
//! ## Features
//!
//! - Sparse cell storage sized for grids of 100 500 rows by 5 001 columns
//! - Row and column insert/delete with exact undo
//! - `=A1` references and `SUM`/`COUNT`/`MAX`/`MIN`/`AVG` over ranges
//! - Cell, row, column and rectangle selection with live statistics
//! - Font size, bold, italic and alignment formatting
//! - Copy/paste, search, and bulk JSON import
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid::prelude::*;
//!
//! let mut book = Spreadsheet::new();
//! book.commit_edit(0, 0, "10");
//! book.commit_edit(1, 0, "32");
//! book.commit_edit(2, 0, "=SUM(A1:A2)");
//! assert_eq!(book.cell_value(2, 0), Some("42"));
//!
//! book.commit_edit(0, 0, "20");
//! assert_eq!(book.cell_value(2, 0), Some("52"));
//!
//! book.undo();
//! assert_eq!(book.cell_value(2, 0), Some("42"));
//! ```

pub mod calculation;
pub mod clipboard;
pub mod command;
pub mod error;
pub mod import;
pub mod notify;
pub mod options;
pub mod prelude;
pub mod search;
pub mod sheet;
pub mod spreadsheet;

pub use calculation::{recalculate, CalculationStats, ERROR_VALUE};
pub use clipboard::Clipboard;
pub use command::{Command, CommandManager, CompositeCommand};
pub use error::{Error, Result};
pub use import::ImportSummary;
pub use notify::{ChangeListener, SheetEvent};
pub use options::SheetOptions;
pub use search::{Search, SearchMatch};
pub use sheet::Sheet;
pub use spreadsheet::{FormatSummary, Spreadsheet, Uniform};

// Re-export core types
pub use sheetgrid_core::{
    Aggregates, Axis, Cell, CellAddress, CellRange, CellStorage, FontStyle, HorizontalAlignment,
    Selection, SelectionManager, MAX_COLS, MAX_ROWS,
};

// Re-export formula types
pub use sheetgrid_formula::{evaluate_formula, parse_formula, FormulaError, FormulaExpr};
