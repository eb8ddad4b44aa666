//! Prelude module - common imports for sheetgrid users
//!
//! ```rust
//! use sheetgrid::prelude::*;
//! ```

pub use crate::{
    Aggregates,
    Axis,
    CalculationStats,
    Cell,
    CellAddress,
    CellRange,
    // Notification
    ChangeListener,
    // Commands
    Command,
    CommandManager,
    // Error types
    Error,
    FormatSummary,
    HorizontalAlignment,
    ImportSummary,
    Result,
    SheetEvent,
    SheetOptions,
    // Main types
    Spreadsheet,
    Uniform,
};
