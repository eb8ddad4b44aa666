//! In-process clipboard

use sheetgrid_core::{CellRange, CellStorage};

/// A rectangular block of copied values
///
/// Data goes in and comes out as owned copies, so later edits to the sheet
/// never leak into the clipboard and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    data: Vec<Vec<String>>,
}

impl Clipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the clipboard contents
    pub fn set_data(&mut self, data: Vec<Vec<String>>) {
        self.data = data;
    }

    /// Copy of the clipboard contents
    pub fn data(&self) -> Vec<Vec<String>> {
        self.data.clone()
    }

    /// Check if nothing has been copied
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of rows and columns held
    pub fn dimensions(&self) -> (usize, usize) {
        let cols = self.data.iter().map(Vec::len).max().unwrap_or(0);
        (self.data.len(), cols)
    }

    /// Read the values of a range without creating cells
    pub fn capture(cells: &CellStorage, range: CellRange) -> Vec<Vec<String>> {
        (range.start.row..=range.end.row)
            .map(|row| {
                (range.start.col..=range.end.col)
                    .map(|col| cells.value_at(row, col).to_string())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capture_reads_without_creating() {
        let mut cells = CellStorage::new();
        cells.set_cell_value(0, 0, "a");
        cells.set_cell_value(1, 1, "d");

        let data = Clipboard::capture(&cells, CellRange::from_indices(0, 0, 1, 1));
        assert_eq!(
            data,
            vec![
                vec!["a".to_string(), String::new()],
                vec![String::new(), "d".to_string()],
            ]
        );
        assert_eq!(cells.cell_count(), 2);
    }

    #[test]
    fn test_set_and_get() {
        let mut clipboard = Clipboard::new();
        assert!(clipboard.is_empty());
        clipboard.set_data(vec![vec!["1".into(), "2".into()]]);
        assert_eq!(clipboard.dimensions(), (1, 2));

        let mut copy = clipboard.data();
        copy[0][0] = "changed".into();
        assert_eq!(clipboard.data()[0][0], "1");
    }
}
