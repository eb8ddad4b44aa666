//! Cell-related types and utilities
//!
//! This module contains:
//! - [`Cell`] - Display value, formula text and formatting of one cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A normalized range of cells (e.g., "A1:B10")
//! - [`CellStorage`] - Sparse store with structural shifts
//! - [`CellValue`] - Typed view over cell text

mod address;
mod data;
mod storage;
mod value;

pub use address::{CellAddress, CellRange, CellRangeIterator};
pub use data::{is_formula, Cell};
pub use storage::CellStorage;
pub use value::{looks_numeric, parse_number, CellValue};
