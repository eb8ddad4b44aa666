//! Formula recalculation
//!
//! Every pass re-evaluates every formula cell exactly once, in row-major
//! order, writing each result back before moving on. There is no dependency
//! graph; a formula reading another formula sees whatever value that cell
//! holds at the moment it is read.
//!
//! # Example
//!
//! ```rust
//! use sheetgrid::calculation::recalculate;
//! use sheetgrid_core::CellStorage;
//!
//! let mut cells = CellStorage::new();
//! cells.set_cell_value(0, 0, "10");
//! cells.set_cell_value(1, 0, "20");
//! cells.get_cell(2, 0).set_formula("=SUM(A1:A2)");
//!
//! let stats = recalculate(&mut cells);
//! assert_eq!(stats.formula_count, 1);
//! assert_eq!(cells.value_at(2, 0), "30");
//! ```

use sheetgrid_core::{is_formula, CellStorage};
use sheetgrid_formula::evaluate_formula;
use tracing::{debug, warn};

/// Value shown in a cell whose formula cannot be evaluated
pub const ERROR_VALUE: &str = "#ERROR";

/// Statistics from a recalculation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculationStats {
    /// Total number of formula cells
    pub formula_count: usize,
    /// Number of cells whose value was rewritten
    pub cells_calculated: usize,
    /// Number of cells that ended up showing [`ERROR_VALUE`]
    pub errors: usize,
}

/// Evaluate one formula against the store, mapping failures to [`ERROR_VALUE`]
///
/// Text that is not a formula is returned unchanged.
pub fn evaluate_text(text: &str, cells: &CellStorage) -> String {
    if !is_formula(text) {
        return text.to_string();
    }
    match evaluate_formula(text, cells) {
        Ok(value) => value,
        Err(err) => {
            warn!(formula = text, error = %err, "formula evaluation failed");
            ERROR_VALUE.to_string()
        }
    }
}

/// Re-evaluate every formula cell in the store
///
/// Per-cell failures are localized to [`ERROR_VALUE`]; the pass never aborts.
pub fn recalculate(cells: &mut CellStorage) -> CalculationStats {
    let formulas = cells.formula_cells();
    let mut stats = CalculationStats {
        formula_count: formulas.len(),
        ..CalculationStats::default()
    };

    for addr in formulas {
        let Some(formula) = cells
            .get(addr.row, addr.col)
            .map(|cell| cell.formula().to_string())
        else {
            continue;
        };

        let result = match evaluate_formula(&formula, cells) {
            Ok(value) => value,
            Err(err) => {
                warn!(cell = %addr, error = %err, "formula evaluation failed");
                stats.errors += 1;
                ERROR_VALUE.to_string()
            }
        };

        if let Some(cell) = cells.get_mut(addr.row, addr.col) {
            cell.set_value(result);
            stats.cells_calculated += 1;
        }
    }

    debug!(
        formulas = stats.formula_count,
        errors = stats.errors,
        "recalculated formulas"
    );
    stats
}
