//! Bulk import of tabular JSON data
//!
//! Two JSON shapes are accepted:
//!
//! - an array of arrays, taken row by row as-is
//! - an array of objects, turned into a header row (the keys of the first
//!   object, in document order) followed by one row per object
//!
//! # Example
//!
//! ```rust
//! use sheetgrid::import::rows_from_json;
//! use sheetgrid::Spreadsheet;
//!
//! let json = serde_json::json!([
//!     {"name": "a", "qty": 1},
//!     {"name": "b", "qty": 2},
//! ]);
//! let rows = rows_from_json(json).unwrap();
//!
//! let mut book = Spreadsheet::new();
//! let summary = book.import_rows(&rows);
//! assert_eq!(summary.values_written, 6);
//! assert_eq!(book.cell_value(0, 1), Some("qty"));
//! assert_eq!(book.cell_value(2, 1), Some("2"));
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::{Error, Result};
use crate::spreadsheet::Spreadsheet;

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Scalars written to the grid
    pub values_written: usize,
    /// Scalars skipped because they were null, empty or outside the grid
    pub skipped: usize,
    /// Populated cells in the grid afterwards
    pub cells_created: usize,
}

/// Text written for a scalar, `None` for values that are skipped
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string()),
        }),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Write rows of scalars into the grid starting at A1
///
/// Runs as a single batch, so listeners see one notification. Imported
/// values bypass undo history.
pub fn import_rows(book: &mut Spreadsheet, rows: &[Vec<Value>]) -> ImportSummary {
    let (max_rows, max_cols) = {
        let cells = book.sheet().cells();
        (cells.max_rows(), cells.max_cols())
    };
    let mut summary = ImportSummary::default();

    book.begin_batch();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let target = u32::try_from(r)
                .ok()
                .filter(|&r| r < max_rows)
                .zip(u16::try_from(c).ok().filter(|&c| c < max_cols));
            match (target, scalar_text(value)) {
                (Some((row, col)), Some(text)) if !text.trim().is_empty() => {
                    book.set_cell_value(row, col, &text);
                    summary.values_written += 1;
                }
                _ => summary.skipped += 1,
            }
        }
    }
    book.end_batch();

    summary.cells_created = book.count_created_cells();
    info!(
        written = summary.values_written,
        skipped = summary.skipped,
        cells = summary.cells_created,
        "imported data"
    );
    summary
}

/// Convert parsed JSON into rows of scalars
pub fn rows_from_json(value: Value) -> Result<Vec<Vec<Value>>> {
    let Value::Array(items) = value else {
        return Err(Error::Import(
            "expected an array of arrays or an array of objects".into(),
        ));
    };

    match items.first() {
        None => Ok(Vec::new()),
        Some(Value::Object(first)) => {
            let headers: Vec<String> = first.keys().cloned().collect();
            let mut rows = Vec::with_capacity(items.len() + 1);
            rows.push(headers.iter().cloned().map(Value::String).collect());
            for (index, item) in items.iter().enumerate() {
                let Value::Object(object) = item else {
                    return Err(Error::Import(format!("row {index} is not an object")));
                };
                rows.push(
                    headers
                        .iter()
                        .map(|key| match object.get(key) {
                            None | Some(Value::Null) => Value::String(String::new()),
                            Some(value) => value.clone(),
                        })
                        .collect(),
                );
            }
            Ok(rows)
        }
        Some(Value::Array(_)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Array(row) => Ok(row),
                _ => Err(Error::Import(format!("row {index} is not an array"))),
            })
            .collect(),
        Some(_) => Err(Error::Import(
            "expected an array of arrays or an array of objects".into(),
        )),
    }
}

/// Parse JSON text into rows of scalars
pub fn parse_json(text: &str) -> Result<Vec<Vec<Value>>> {
    rows_from_json(serde_json::from_str(text)?)
}

/// Read a JSON file into rows of scalars
pub fn read_json_file(path: impl AsRef<Path>) -> Result<Vec<Vec<Value>>> {
    let text = fs::read_to_string(path)?;
    parse_json(&text)
}
