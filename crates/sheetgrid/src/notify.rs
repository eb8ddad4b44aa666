//! Change notification
//!
//! The engine tells listeners what kind of thing changed after each mutation
//! so a view can redraw. During a batch, individual events are counted
//! instead of delivered, and one [`SheetEvent::Batch`] goes out when the
//! batch ends.

use std::fmt;

use sheetgrid_core::Axis;

/// What changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetEvent {
    /// Cell values or formulas changed
    Cells,
    /// Rows or columns were inserted or deleted
    Structure(Axis),
    /// Cell formatting changed
    Format,
    /// A row height or column width changed
    Resize {
        /// Row or column
        axis: Axis,
        /// Line index
        index: u32,
        /// New size in pixels
        size: f64,
    },
    /// The selection changed
    Selection,
    /// Undo or redo was applied
    History,
    /// A batch finished after suppressing `changes` events
    Batch {
        /// Number of events suppressed
        changes: usize,
    },
}

/// Receives [`SheetEvent`]s
pub trait ChangeListener {
    /// Called after a mutation
    fn on_change(&mut self, event: &SheetEvent);
}

impl<F> ChangeListener for F
where
    F: FnMut(&SheetEvent),
{
    fn on_change(&mut self, event: &SheetEvent) {
        self(event)
    }
}

/// Fan-out of events to registered listeners, with batch suppression
#[derive(Default)]
pub struct Notifier {
    listeners: Vec<Box<dyn ChangeListener>>,
    batch_depth: usize,
    suppressed: usize,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .field("batch_depth", &self.batch_depth)
            .field("suppressed", &self.suppressed)
            .finish()
    }
}

impl Notifier {
    /// Create a notifier with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn subscribe(&mut self, listener: impl ChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver an event, or count it while a batch is open
    pub fn notify(&mut self, event: SheetEvent) {
        if self.batch_depth > 0 {
            self.suppressed += 1;
            return;
        }
        self.dispatch(&event);
    }

    fn dispatch(&mut self, event: &SheetEvent) {
        for listener in &mut self.listeners {
            listener.on_change(event);
        }
    }

    /// Open a batch; batches nest
    pub fn begin_batch(&mut self) {
        self.batch_depth += 1;
    }

    /// Close a batch, emitting one [`SheetEvent::Batch`] when the outermost
    /// batch closes
    pub fn end_batch(&mut self) {
        if self.batch_depth == 0 {
            return;
        }
        self.batch_depth -= 1;
        if self.batch_depth == 0 {
            let changes = std::mem::take(&mut self.suppressed);
            self.dispatch(&SheetEvent::Batch { changes });
        }
    }

    /// Check if a batch is open
    pub fn in_batch(&self) -> bool {
        self.batch_depth > 0
    }
}
