//! Formula syntax tree

use sheetgrid_core::{CellAddress, CellRange};

/// A parsed formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaExpr {
    /// Bare cell reference, e.g. `A1`
    Reference(CellAddress),
    /// Function over a rectangle, e.g. `SUM(A1:B3)`
    ///
    /// The name is kept uppercased but unvalidated; an unknown name only
    /// surfaces at evaluation time.
    RangeFunction { name: String, range: CellRange },
}

impl FormulaExpr {
    /// The cells this formula reads
    pub fn range(&self) -> CellRange {
        match self {
            FormulaExpr::Reference(addr) => CellRange::single(*addr),
            FormulaExpr::RangeFunction { range, .. } => *range,
        }
    }
}
