//! Error types for the sheetgrid engine

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the engine
#[derive(Debug, Error)]
pub enum Error {
    /// Addressing error from the core types
    #[error(transparent)]
    Core(#[from] sheetgrid_core::Error),

    /// Formula parse error
    #[error(transparent)]
    Formula(#[from] sheetgrid_formula::FormulaError),

    /// Import data has an unsupported shape
    #[error("Import error: {0}")]
    Import(String),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading import data
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
