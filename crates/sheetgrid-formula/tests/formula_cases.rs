//! Formula evaluation against a populated store

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sheetgrid_core::{CellRange, CellStorage};
use sheetgrid_formula::{evaluate_formula, parse_formula, referenced_range, FormulaError};

fn grid(rows: &[&[&str]]) -> CellStorage {
    let mut cells = CellStorage::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            cells.set_cell_value(r as u32, c as u16, value);
        }
    }
    cells
}

#[test]
fn documented_cases() {
    let cells = grid(&[&["7"]]);
    assert_eq!(evaluate_formula("=A1", &cells).unwrap(), "7");

    let cells = grid(&[&["1"], &["x"], &["3"]]);
    assert_eq!(evaluate_formula("=SUM(A1:A3)", &cells).unwrap(), "4");

    let cells = grid(&[&["2"], &["3"]]);
    assert_eq!(evaluate_formula("=AVG(A1:A2)", &cells).unwrap(), "2.50");

    let cells = CellStorage::new();
    assert_eq!(evaluate_formula("=SUM(A1:A1)", &cells).unwrap(), "0");
}

#[test]
fn rectangle_spans_rows_and_columns() {
    let cells = grid(&[
        &["1", "2", "3"],
        &["4", "five", "6"],
        &["7", "8", "9"],
    ]);
    assert_eq!(evaluate_formula("=SUM(B1:C3)", &cells).unwrap(), "28");
    assert_eq!(evaluate_formula("=COUNT(A1:C3)", &cells).unwrap(), "8");
    assert_eq!(evaluate_formula("=AVG(A1:A3)", &cells).unwrap(), "4.00");
    assert_eq!(evaluate_formula("=MAX(C3:A1)", &cells).unwrap(), "9");
}

#[test]
fn formula_text_in_range_is_read_by_prefix() {
    // a cell whose value is still its own formula text has no numeric prefix
    let mut cells = grid(&[&["5"]]);
    cells.get_cell(1, 0).set_formula("=A1");
    assert_eq!(evaluate_formula("=SUM(A1:A2)", &cells).unwrap(), "5");
}

#[test]
fn highlight_range_follows_parse() {
    assert_eq!(
        referenced_range("=sum(c2:a1)"),
        Some(CellRange::parse("A1:C2").unwrap())
    );
    assert!(matches!(parse_formula("=SUM()"), Err(FormulaError::Parse(_))));
}

proptest! {
    #[test]
    fn sum_matches_integer_total(values in prop::collection::vec(-1000i64..1000, 1..30)) {
        let mut cells = CellStorage::new();
        for (row, v) in values.iter().enumerate() {
            cells.set_cell_value(row as u32, 2, &v.to_string());
        }
        let formula = format!("=SUM(C1:C{})", values.len());
        let expected: i64 = values.iter().sum();
        prop_assert_eq!(evaluate_formula(&formula, &cells).unwrap(), expected.to_string());

        let count = format!("=COUNT(C1:C{})", values.len());
        prop_assert_eq!(evaluate_formula(&count, &cells).unwrap(), values.len().to_string());
    }
}
