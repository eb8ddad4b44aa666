//! Undoable commands and the history that replays them
//!
//! Every mutation of a [`Sheet`] that a user can undo goes through a
//! [`Command`]. A command captures the state it overwrites when it executes,
//! so `undo` after `execute` restores exactly what was there before.
//!
//! # Example
//!
//! ```rust
//! use sheetgrid::command::{CommandManager, EditCellCommand};
//! use sheetgrid::Sheet;
//!
//! let mut sheet = Sheet::new();
//! let mut history = CommandManager::new();
//!
//! history.execute(EditCellCommand::new(0, 0, "hello"), &mut sheet);
//! assert_eq!(sheet.cells().value_at(0, 0), "hello");
//!
//! history.undo(&mut sheet);
//! assert_eq!(sheet.cells().value_at(0, 0), "");
//!
//! history.redo(&mut sheet);
//! assert_eq!(sheet.cells().value_at(0, 0), "hello");
//! ```

mod clipboard;
mod edit;
mod format;
mod resize;
mod structure;

pub use clipboard::{CopyCommand, PasteCommand};
pub use edit::EditCellCommand;
pub use format::{FormatChange, FormatCommand};
pub use resize::ResizeCommand;
pub use structure::{DeleteLineCommand, InsertLineCommand};

use std::fmt;

use sheetgrid_core::{Cell, CellStorage};
use tracing::debug;

use crate::sheet::Sheet;

/// A reversible mutation of a [`Sheet`]
pub trait Command: fmt::Debug {
    /// Apply the change, capturing whatever it overwrites
    fn execute(&mut self, sheet: &mut Sheet);

    /// Revert the most recent `execute`
    fn undo(&mut self, sheet: &mut Sheet);

    /// Re-apply after an undo
    fn redo(&mut self, sheet: &mut Sheet) {
        self.execute(sheet);
    }

    /// Short description for logs
    fn label(&self) -> String;

    /// Whether the command belongs on the undo stack
    fn records_history(&self) -> bool {
        true
    }
}

/// Several commands applied as one undo step
///
/// Children execute in insertion order and undo in reverse.
#[derive(Debug, Default)]
pub struct CompositeCommand {
    commands: Vec<Box<dyn Command>>,
}

impl CompositeCommand {
    /// Create an empty composite
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child command
    pub fn push(&mut self, command: impl Command + 'static) {
        self.commands.push(Box::new(command));
    }

    /// Append a child command, builder style
    pub fn with(mut self, command: impl Command + 'static) -> Self {
        self.push(command);
        self
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if there are no children
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for CompositeCommand {
    fn execute(&mut self, sheet: &mut Sheet) {
        for command in &mut self.commands {
            command.execute(sheet);
        }
    }

    fn undo(&mut self, sheet: &mut Sheet) {
        for command in self.commands.iter_mut().rev() {
            command.undo(sheet);
        }
    }

    fn redo(&mut self, sheet: &mut Sheet) {
        for command in &mut self.commands {
            command.redo(sheet);
        }
    }

    fn label(&self) -> String {
        format!("composite of {}", self.commands.len())
    }
}

/// Undo and redo stacks of executed commands
#[derive(Debug, Default)]
pub struct CommandManager {
    undo_stack: Vec<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
    limit: Option<usize>,
}

impl CommandManager {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history keeping at most `limit` undo entries
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Execute a command and record it
    ///
    /// Clears the redo stack. Commands that opt out of history run but are
    /// not recorded.
    pub fn execute(&mut self, mut command: impl Command + 'static, sheet: &mut Sheet) {
        command.execute(sheet);
        debug!(command = %command.label(), "executed command");
        if command.records_history() {
            self.record(Box::new(command));
        }
    }

    /// Record a command whose effect has already been applied
    pub fn push_executed(&mut self, command: impl Command + 'static) {
        if command.records_history() {
            self.record(Box::new(command));
        }
    }

    fn record(&mut self, command: Box<dyn Command>) {
        self.redo_stack.clear();
        self.undo_stack.push(command);
        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                self.undo_stack.remove(0);
            }
        }
    }

    /// Undo the most recent command, returning `false` if there was none
    pub fn undo(&mut self, sheet: &mut Sheet) -> bool {
        let Some(mut command) = self.undo_stack.pop() else {
            return false;
        };
        command.undo(sheet);
        debug!(command = %command.label(), "undid command");
        self.redo_stack.push(command);
        true
    }

    /// Redo the most recently undone command, returning `false` if there was none
    pub fn redo(&mut self, sheet: &mut Sheet) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        command.redo(sheet);
        debug!(command = %command.label(), "redid command");
        self.undo_stack.push(command);
        true
    }

    /// Drop all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Check if undo is possible
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is possible
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo entries
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redo entries
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}

/// Put back a cell captured before a change; `None` means it did not exist
pub(crate) fn restore_cell(cells: &mut CellStorage, row: u32, col: u16, previous: Option<&Cell>) {
    match previous {
        Some(cell) => {
            cells.insert(cell.clone());
        }
        None => {
            cells.remove(row, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Command for Recorder {
        fn execute(&mut self, _sheet: &mut Sheet) {
            self.log.borrow_mut().push(format!("do {}", self.name));
        }

        fn undo(&mut self, _sheet: &mut Sheet) {
            self.log.borrow_mut().push(format!("undo {}", self.name));
        }

        fn label(&self) -> String {
            self.name.to_string()
        }
    }

    #[test]
    fn test_composite_undoes_in_reverse() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let recorder = |name| Recorder {
            name,
            log: Rc::clone(&log),
        };
        let composite = CompositeCommand::new()
            .with(recorder("c1"))
            .with(recorder("c2"))
            .with(recorder("c3"));

        let mut sheet = Sheet::new();
        let mut history = CommandManager::new();
        history.execute(composite, &mut sheet);
        history.undo(&mut sheet);

        assert_eq!(
            *log.borrow(),
            vec!["do c1", "do c2", "do c3", "undo c3", "undo c2", "undo c1"]
        );
    }

    #[test]
    fn test_new_command_clears_redo() {
        let mut sheet = Sheet::new();
        let mut history = CommandManager::new();
        history.execute(EditCellCommand::new(0, 0, "a"), &mut sheet);
        history.undo(&mut sheet);
        assert!(history.can_redo());

        history.execute(EditCellCommand::new(0, 0, "b"), &mut sheet);
        assert!(!history.can_redo());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut sheet = Sheet::new();
        let mut history = CommandManager::new();
        assert!(!history.undo(&mut sheet));
        assert!(!history.redo(&mut sheet));
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut sheet = Sheet::new();
        let mut history = CommandManager::with_limit(Some(2));
        for text in ["1", "2", "3"] {
            history.execute(EditCellCommand::new(0, 0, text), &mut sheet);
        }
        assert_eq!(history.undo_len(), 2);
        history.undo(&mut sheet);
        history.undo(&mut sheet);
        assert_eq!(sheet.cells().value_at(0, 0), "1");
        assert!(!history.can_undo());
    }
}
