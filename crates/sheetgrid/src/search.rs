//! Case-insensitive text search over populated cells

use sheetgrid_core::{CellAddress, CellStorage};

/// A cell whose value contains the search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub address: CellAddress,
    pub value: String,
}

/// Search results with a cursor for next/previous navigation
#[derive(Debug, Clone, Default)]
pub struct Search {
    matches: Vec<SearchMatch>,
    current: usize,
}

impl Search {
    /// Create an empty search
    pub fn new() -> Self {
        Self::default()
    }

    /// Find every cell whose value contains `term`, ignoring case
    ///
    /// Matches are in row-major order. Returns the first match. A blank term
    /// clears the results.
    pub fn find(&mut self, term: &str, cells: &CellStorage) -> Option<CellAddress> {
        self.clear();
        if term.trim().is_empty() {
            return None;
        }

        let needle = term.to_lowercase();
        self.matches = cells
            .iter()
            .filter(|cell| cell.value().to_lowercase().contains(&needle))
            .map(|cell| SearchMatch {
                address: CellAddress::new(cell.row(), cell.col()),
                value: cell.value().to_string(),
            })
            .collect();
        self.current_address()
    }

    /// Advance to the next match, wrapping to the first
    pub fn next(&mut self) -> Option<CellAddress> {
        if self.matches.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.matches.len();
        self.current_address()
    }

    /// Step back to the previous match, wrapping to the last
    pub fn prev(&mut self) -> Option<CellAddress> {
        if self.matches.is_empty() {
            return None;
        }
        self.current = self
            .current
            .checked_sub(1)
            .unwrap_or(self.matches.len() - 1);
        self.current_address()
    }

    /// Drop all results
    pub fn clear(&mut self) {
        self.matches.clear();
        self.current = 0;
    }

    /// Address of the current match
    pub fn current_address(&self) -> Option<CellAddress> {
        self.matches.get(self.current).map(|m| m.address)
    }

    /// All matches
    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    /// Check if a cell is among the matches
    pub fn is_match(&self, row: u32, col: u16) -> bool {
        self.matches
            .iter()
            .any(|m| m.address.row == row && m.address.col == col)
    }

    /// One-based position of the current match and the total, `(0, 0)` when empty
    pub fn status(&self) -> (usize, usize) {
        if self.matches.is_empty() {
            (0, 0)
        } else {
            (self.current + 1, self.matches.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells() -> CellStorage {
        let mut cells = CellStorage::new();
        cells.set_cell_value(3, 0, "Apple pie");
        cells.set_cell_value(0, 2, "pineapple");
        cells.set_cell_value(1, 1, "banana");
        cells
    }

    #[test]
    fn test_find_is_case_insensitive_and_row_major() {
        let mut search = Search::new();
        let first = search.find("APPLE", &cells());
        assert_eq!(first, Some(CellAddress::new(0, 2)));
        assert_eq!(search.matches().len(), 2);
        assert_eq!(search.status(), (1, 2));
        assert!(search.is_match(3, 0));
        assert!(!search.is_match(1, 1));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut search = Search::new();
        search.find("apple", &cells());
        assert_eq!(search.next(), Some(CellAddress::new(3, 0)));
        assert_eq!(search.next(), Some(CellAddress::new(0, 2)));
        assert_eq!(search.prev(), Some(CellAddress::new(3, 0)));
    }

    #[test]
    fn test_blank_term_and_no_match() {
        let mut search = Search::new();
        assert_eq!(search.find("  ", &cells()), None);
        assert_eq!(search.find("cherry", &cells()), None);
        assert_eq!(search.status(), (0, 0));
        assert_eq!(search.next(), None);
    }
}
