//! Structural shift properties of the sparse store

use std::collections::BTreeMap;

use proptest::prelude::*;
use sheetgrid_core::CellStorage;

fn snapshot(cells: &CellStorage) -> BTreeMap<(u32, u16), String> {
    cells
        .iter()
        .map(|c| ((c.row(), c.col()), c.value().to_string()))
        .collect()
}

fn populated(entries: &[(u32, u16, String)]) -> CellStorage {
    let mut cells = CellStorage::with_bounds(200, 50);
    for (row, col, value) in entries {
        cells.set_cell_value(*row, *col, value);
    }
    cells
}

proptest! {
    #[test]
    fn rows_down_then_up_restores_values(
        entries in prop::collection::vec((0u32..150, 0u16..50, "[a-z0-9]{1,4}"), 0..40),
        at in 0u32..150,
    ) {
        let mut cells = populated(&entries);
        let before = snapshot(&cells);

        cells.shift_rows_down(at);
        cells.shift_rows_up(at);

        prop_assert_eq!(snapshot(&cells), before);
    }

    #[test]
    fn cols_right_then_left_restores_values(
        entries in prop::collection::vec((0u32..200, 0u16..40, "[a-z0-9]{1,4}"), 0..40),
        at in 0u16..40,
    ) {
        let mut cells = populated(&entries);
        let before = snapshot(&cells);

        cells.shift_cols_right(at);
        cells.shift_cols_left(at);

        prop_assert_eq!(snapshot(&cells), before);
    }

    #[test]
    fn shifted_cells_keep_coordinates_in_sync(
        entries in prop::collection::vec((0u32..200, 0u16..50, "[a-z]{1,3}"), 1..30),
        at in 0u32..200,
    ) {
        let mut cells = populated(&entries);
        cells.shift_rows_down(at);
        cells.shift_cols_right((at % 50) as u16);

        for cell in cells.iter() {
            prop_assert_eq!(cells.get(cell.row(), cell.col()).map(|c| c.value()), Some(cell.value()));
            prop_assert!(cell.row() < 200);
            prop_assert!(cell.col() < 50);
        }
    }
}

#[test]
fn insert_at_row_five_then_delete_restores() {
    let mut cells = CellStorage::new();
    for row in 0..10 {
        cells.set_cell_value(row, 0, &format!("r{row}"));
        cells.set_cell_value(row, 3, &format!("{}", row * 10));
    }
    let before = snapshot(&cells);

    cells.shift_rows_down(5);
    assert_eq!(cells.value_at(5, 0), "");
    assert_eq!(cells.value_at(6, 0), "r5");
    assert_eq!(cells.value_at(10, 3), "90");

    cells.shift_rows_up(5);
    assert_eq!(snapshot(&cells), before);
}
