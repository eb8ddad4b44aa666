//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Text is neither a cell reference nor `FUNCTION(START:END)`
    #[error("Parse error: {0}")]
    Parse(String),

    /// Reference to a cell outside the grid
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
}

impl From<sheetgrid_core::Error> for FormulaError {
    fn from(err: sheetgrid_core::Error) -> Self {
        FormulaError::InvalidReference(err.to_string())
    }
}
