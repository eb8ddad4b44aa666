//! Row heights and column widths
//!
//! [`AxisSizes`] keeps one size per row (or column). Inserting or deleting a
//! row shifts the sizes after it, mirroring what the cell store does with the
//! cells themselves. The number of entries never changes: an insert pushes
//! the last entry off the end and a delete appends a default one.

use std::fmt;

/// One of the two grid axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// Lowercase name for messages
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered list of sizes along one axis
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSizes {
    sizes: Vec<f64>,
    default_size: f64,
}

impl AxisSizes {
    /// Create `count` entries of `default_size`
    pub fn new(count: u32, default_size: f64) -> Self {
        Self {
            sizes: vec![default_size; count as usize],
            default_size,
        }
    }

    /// Number of entries
    pub fn len(&self) -> u32 {
        self.sizes.len() as u32
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Size given to new entries
    pub fn default_size(&self) -> f64 {
        self.default_size
    }

    /// Size of an entry, or `None` past the end
    pub fn get(&self, index: u32) -> Option<f64> {
        self.sizes.get(index as usize).copied()
    }

    /// Size of an entry, falling back to the default past the end
    pub fn size(&self, index: u32) -> f64 {
        self.get(index).unwrap_or(self.default_size)
    }

    /// Set the size of an existing entry
    ///
    /// Returns `false` (and changes nothing) when `index` is past the end.
    pub fn set_size(&mut self, index: u32, size: f64) -> bool {
        match self.sizes.get_mut(index as usize) {
            Some(slot) => {
                *slot = size;
                true
            }
            None => false,
        }
    }

    /// Insert a default-sized entry at `index`, shifting later entries
    ///
    /// Returns the size pushed off the end, or `None` (and changes nothing)
    /// when `index` is past the end.
    pub fn insert(&mut self, index: u32) -> Option<f64> {
        let index = index as usize;
        if index >= self.sizes.len() {
            return None;
        }
        self.sizes.insert(index, self.default_size);
        self.sizes.pop()
    }

    /// Remove the entry at `index`, shifting later entries back and
    /// appending a default-sized entry
    ///
    /// Returns the removed size, or `None` when `index` is past the end.
    pub fn delete(&mut self, index: u32) -> Option<f64> {
        let index = index as usize;
        if index >= self.sizes.len() {
            return None;
        }
        let removed = self.sizes.remove(index);
        self.sizes.push(self.default_size);
        Some(removed)
    }

    /// Reverse an [`insert`](Self::insert), putting back the size it pushed off
    pub fn undo_insert(&mut self, index: u32, dropped: f64) {
        let index = index as usize;
        if index < self.sizes.len() {
            self.sizes.remove(index);
            self.sizes.push(dropped);
        }
    }

    /// Reverse a [`delete`](Self::delete), putting `removed` back at `index`
    pub fn undo_delete(&mut self, index: u32, removed: f64) {
        let index = index as usize;
        if index < self.sizes.len() {
            self.sizes.pop();
            self.sizes.insert(index, removed);
        }
    }

    /// Distance from the start of the axis to the leading edge of `index`
    pub fn offset(&self, index: u32) -> f64 {
        let end = (index as usize).min(self.sizes.len());
        self.sizes[..end].iter().sum()
    }

    /// Sum of all sizes
    pub fn total(&self) -> f64 {
        self.sizes.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let rows = AxisSizes::new(4, 30.0);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows.size(3), 30.0);
        assert_eq!(rows.get(4), None);
        assert_eq!(rows.total(), 120.0);
    }

    #[test]
    fn test_offsets() {
        let mut cols = AxisSizes::new(3, 100.0);
        cols.set_size(1, 50.0);
        assert_eq!(cols.offset(0), 0.0);
        assert_eq!(cols.offset(1), 100.0);
        assert_eq!(cols.offset(2), 150.0);
        assert_eq!(cols.offset(99), 250.0);
    }

    #[test]
    fn test_insert_and_delete_shift_entries() {
        let mut rows = AxisSizes::new(3, 30.0);
        rows.set_size(1, 45.0);
        rows.set_size(2, 60.0);

        assert_eq!(rows.insert(1), Some(60.0));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.size(1), 30.0);
        assert_eq!(rows.size(2), 45.0);

        assert_eq!(rows.delete(1), Some(30.0));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.size(1), 45.0);
        assert_eq!(rows.size(2), 30.0);
    }

    #[test]
    fn test_undo_restores_entries() {
        let mut rows = AxisSizes::new(4, 30.0);
        rows.set_size(0, 10.0);
        rows.set_size(3, 90.0);
        let before = rows.clone();

        let dropped = rows.insert(0).unwrap();
        rows.undo_insert(0, dropped);
        assert_eq!(rows, before);

        let removed = rows.delete(0).unwrap();
        rows.undo_delete(0, removed);
        assert_eq!(rows, before);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut rows = AxisSizes::new(2, 30.0);
        assert_eq!(rows.delete(2), None);
        assert_eq!(rows.insert(10), None);
        assert!(!rows.set_size(5, 10.0));
        assert_eq!(rows, AxisSizes::new(2, 30.0));
    }
}
