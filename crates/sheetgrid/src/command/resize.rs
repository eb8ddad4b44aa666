use sheetgrid_core::Axis;

use super::Command;
use crate::sheet::Sheet;

/// Change the height of a row or the width of a column
#[derive(Debug, Clone)]
pub struct ResizeCommand {
    axis: Axis,
    index: u32,
    old_size: f64,
    new_size: f64,
}

impl ResizeCommand {
    /// Create a resize from `old_size` to `new_size`
    pub fn new(axis: Axis, index: u32, old_size: f64, new_size: f64) -> Self {
        Self {
            axis,
            index,
            old_size,
            new_size,
        }
    }

    /// Replace the target size, used while a drag is still moving
    pub fn update_new_size(&mut self, new_size: f64) {
        self.new_size = new_size;
    }

    /// Row or column index being resized
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Size before the resize
    pub fn old_size(&self) -> f64 {
        self.old_size
    }

    /// Size after the resize
    pub fn new_size(&self) -> f64 {
        self.new_size
    }
}

impl Command for ResizeCommand {
    fn execute(&mut self, sheet: &mut Sheet) {
        sheet.set_size(self.axis, self.index, self.new_size);
    }

    fn undo(&mut self, sheet: &mut Sheet) {
        sheet.set_size(self.axis, self.index, self.old_size);
    }

    fn label(&self) -> String {
        format!("resize {} {}", self.axis, self.index)
    }
}
