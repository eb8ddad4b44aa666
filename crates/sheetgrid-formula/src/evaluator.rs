//! Formula evaluation against a cell source

use sheetgrid_core::{parse_number, CellRange, CellStorage};
use tracing::debug;

use crate::ast::FormulaExpr;
use crate::error::FormulaResult;
use crate::functions::RangeFunction;
use crate::parser::parse_formula;

/// Result shown for a range function with an unknown name
pub const UNKNOWN_FUNCTION: &str = "#FUNC";

/// Read access to cell values for evaluation
pub trait CellSource {
    /// Value of an existing cell, or `None` if the cell was never created
    fn cell_value(&self, row: u32, col: u16) -> Option<&str>;

    /// Values of the existing cells inside a range, in any order
    fn range_values(&self, range: CellRange) -> Vec<&str>;
}

impl CellSource for CellStorage {
    fn cell_value(&self, row: u32, col: u16) -> Option<&str> {
        self.get(row, col).map(|cell| cell.value())
    }

    fn range_values(&self, range: CellRange) -> Vec<&str> {
        self.iter_range(range).map(|cell| cell.value()).collect()
    }
}

/// Evaluate a parsed formula
///
/// - A reference yields the referenced value, or `"0"` if the cell does not exist.
/// - A range function collects the numeric readings of existing cells in the
///   range. An empty collection yields `"0"` whatever the function name; an
///   unknown name otherwise yields [`UNKNOWN_FUNCTION`].
pub fn evaluate<S: CellSource + ?Sized>(expr: &FormulaExpr, source: &S) -> String {
    match expr {
        FormulaExpr::Reference(addr) => source
            .cell_value(addr.row, addr.col)
            .unwrap_or("0")
            .to_string(),
        FormulaExpr::RangeFunction { name, range } => {
            let values: Vec<f64> = source
                .range_values(*range)
                .into_iter()
                .filter_map(parse_number)
                .filter(|n| !n.is_nan())
                .collect();

            if values.is_empty() {
                return "0".to_string();
            }

            match RangeFunction::from_name(name) {
                Some(function) => function.apply(&values),
                None => {
                    debug!(function = %name, "unknown range function");
                    UNKNOWN_FUNCTION.to_string()
                }
            }
        }
    }
}

/// Parse and evaluate formula text (with or without the leading `=`)
pub fn evaluate_formula<S: CellSource + ?Sized>(formula: &str, source: &S) -> FormulaResult<String> {
    let expr = parse_formula(formula)?;
    Ok(evaluate(&expr, source))
}
