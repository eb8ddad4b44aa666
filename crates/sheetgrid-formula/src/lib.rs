//! # sheetgrid-formula
//!
//! Formula parser and evaluator for sheetgrid.
//!
//! The formula language is deliberately small. A formula is either a bare
//! cell reference (`=A1`) or one range function applied to a rectangle
//! (`=SUM(A1:B4)`). Supported functions are SUM, COUNT, MAX, MIN and AVG,
//! matched case-insensitively.
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid_core::CellStorage;
//! use sheetgrid_formula::evaluate_formula;
//!
//! let mut cells = CellStorage::new();
//! cells.set_cell_value(0, 0, "2");
//! cells.set_cell_value(1, 0, "3");
//!
//! assert_eq!(evaluate_formula("=SUM(A1:A2)", &cells).unwrap(), "5");
//! assert_eq!(evaluate_formula("=AVG(A1:A2)", &cells).unwrap(), "2.50");
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;

pub use ast::FormulaExpr;
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, evaluate_formula, CellSource, UNKNOWN_FUNCTION};
pub use functions::RangeFunction;
pub use parser::{parse_formula, referenced_range};
