//! The spreadsheet facade
//!
//! [`Spreadsheet`] ties together the sheet state, the selection, the undo
//! history, change notification and search. Everything a view needs to
//! drive the grid goes through here; mutations that a user can undo are
//! routed through [`Command`]s.

use std::path::Path;

use sheetgrid_core::{
    Aggregates, Axis, Cell, CellAddress, CellRange, HorizontalAlignment, SelectionManager,
    MIN_COLUMN_WIDTH, MIN_ROW_HEIGHT,
};
use sheetgrid_formula::referenced_range;

use crate::calculation::CalculationStats;
use crate::command::{
    Command, CommandManager, CompositeCommand, CopyCommand, DeleteLineCommand, EditCellCommand,
    FormatChange, FormatCommand, InsertLineCommand, PasteCommand, ResizeCommand,
};
use crate::error::Result;
use crate::import::{self, ImportSummary};
use crate::notify::{ChangeListener, Notifier, SheetEvent};
use crate::options::SheetOptions;
use crate::search::Search;
use crate::sheet::Sheet;

/// Whether every selected cell shares a formatting attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform<T> {
    /// All cells have this value
    Same(T),
    /// Cells disagree
    Mixed,
}

impl<T: Copy + PartialEq> Uniform<T> {
    fn of(mut values: impl Iterator<Item = T>) -> Option<Self> {
        let first = values.next()?;
        Some(if values.all(|v| v == first) {
            Self::Same(first)
        } else {
            Self::Mixed
        })
    }

    /// The shared value, if there is one
    pub fn value(self) -> Option<T> {
        match self {
            Self::Same(value) => Some(value),
            Self::Mixed => None,
        }
    }
}

/// Formatting shared by the cells of the current selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatSummary {
    pub font_size: Uniform<f64>,
    pub bold: Uniform<bool>,
    pub italic: Uniform<bool>,
    pub alignment: Uniform<HorizontalAlignment>,
    /// Number of cells summarized
    pub cells: usize,
}

/// A row or column resize in progress
#[derive(Debug, Clone)]
struct ResizeSession {
    axis: Axis,
    /// One command per line following the drag, updated as it moves
    commands: Vec<ResizeCommand>,
    size: Option<f64>,
}

/// An in-memory spreadsheet
#[derive(Debug)]
pub struct Spreadsheet {
    sheet: Sheet,
    selection: SelectionManager,
    history: CommandManager,
    notifier: Notifier,
    search: Search,
    resize: Option<ResizeSession>,
}

impl Default for Spreadsheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Spreadsheet {
    /// Create a spreadsheet with default options
    pub fn new() -> Self {
        Self::with_options(SheetOptions::default())
    }

    /// Create a spreadsheet from options
    pub fn with_options(options: SheetOptions) -> Self {
        Self {
            sheet: Sheet::with_options(&options),
            selection: SelectionManager::with_limits(
                options.rows,
                options.columns,
                options.select_all_limit,
            ),
            history: CommandManager::with_limit(options.history_limit),
            notifier: Notifier::new(),
            search: Search::new(),
            resize: None,
        }
    }

    /// Underlying sheet state
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Undo history
    pub fn history(&self) -> &CommandManager {
        &self.history
    }

    fn run(&mut self, command: impl Command + 'static, event: SheetEvent) {
        self.history.execute(command, &mut self.sheet);
        self.notifier.notify(event);
    }

    // === Cells ===

    /// Get a cell, creating it if needed
    pub fn get_cell(&mut self, row: u32, col: u16) -> &mut Cell {
        self.sheet.cells_mut().get_cell(row, col)
    }

    /// Get a cell if it exists
    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.sheet.cells().get(row, col)
    }

    /// Get a cell's value if the cell exists
    pub fn cell_value(&self, row: u32, col: u16) -> Option<&str> {
        self.cell(row, col).map(Cell::value)
    }

    /// Write a value directly, bypassing history
    ///
    /// Blank values are ignored.
    pub fn set_cell_value(&mut self, row: u32, col: u16, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        self.sheet.cells_mut().set_cell_value(row, col, value);
        self.notifier.notify(SheetEvent::Cells);
    }

    /// Number of populated cells
    pub fn count_created_cells(&self) -> usize {
        self.sheet.cells().cell_count()
    }

    /// Re-evaluate every formula
    pub fn recalculate_formulas(&mut self) -> CalculationStats {
        let stats = self.sheet.recalculate();
        self.notifier.notify(SheetEvent::Cells);
        stats
    }

    // === Editing ===

    /// Text an editor should show: the formula if there is one, else the value
    pub fn editor_text(&self, row: u32, col: u16) -> &str {
        self.cell(row, col).map_or("", Cell::editor_text)
    }

    /// Commit editor text to a cell as one undoable edit
    ///
    /// Returns `false` when the text is unchanged or the cell lies outside
    /// the grid.
    pub fn commit_edit(&mut self, row: u32, col: u16, text: &str) -> bool {
        let cells = self.sheet.cells();
        if row >= cells.max_rows() || col >= cells.max_cols() {
            return false;
        }
        if self.editor_text(row, col) == text {
            return false;
        }
        self.run(EditCellCommand::new(row, col, text), SheetEvent::Cells);
        true
    }

    /// Rectangle read by the formula in a cell, for range highlighting
    pub fn formula_range(&self, row: u32, col: u16) -> Option<CellRange> {
        self.cell(row, col)
            .filter(|cell| cell.has_formula())
            .and_then(|cell| referenced_range(cell.formula()))
    }

    // === Selection ===

    /// Current selection
    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Mutable selection
    ///
    /// Listeners are not told about changes made through this handle; call
    /// [`notify_selection`](Self::notify_selection) afterwards if they need to be.
    pub fn selection_mut(&mut self) -> &mut SelectionManager {
        &mut self.selection
    }

    /// Tell listeners the selection changed
    pub fn notify_selection(&mut self) {
        self.notifier.notify(SheetEvent::Selection);
    }

    /// Addresses of the populated cells covered by the selection
    ///
    /// Whole columns take precedence over whole rows, then a single cell,
    /// then a rectangle.
    pub fn selected_cells(&self) -> Vec<CellAddress> {
        let cells = self.sheet.cells();
        let address = |cell: &Cell| CellAddress::new(cell.row(), cell.col());

        let columns = self.selection.selected_columns();
        if !columns.is_empty() {
            return columns
                .iter()
                .flat_map(|&col| cells.iter_column(col).map(address))
                .collect();
        }
        let rows = self.selection.selected_rows();
        if !rows.is_empty() {
            return rows
                .iter()
                .flat_map(|&row| cells.iter_row(row).map(address))
                .collect();
        }
        if let Some(addr) = self.selection.selected_cell() {
            return cells
                .get(addr.row, addr.col)
                .map(address)
                .into_iter()
                .collect();
        }
        if let Some(rect) = self.selection.drag_rect() {
            return cells.iter_range(rect).map(address).collect();
        }
        Vec::new()
    }

    /// Formatting shared by the selected cells, `None` when none are populated
    pub fn format_summary(&self) -> Option<FormatSummary> {
        let selected: Vec<&Cell> = self
            .selected_cells()
            .into_iter()
            .filter_map(|addr| self.cell(addr.row, addr.col))
            .collect();

        Some(FormatSummary {
            font_size: Uniform::of(selected.iter().map(|c| c.font_size()))?,
            bold: Uniform::of(selected.iter().map(|c| c.is_bold()))?,
            italic: Uniform::of(selected.iter().map(|c| c.is_italic()))?,
            alignment: Uniform::of(selected.iter().map(|c| c.effective_alignment()))?,
            cells: selected.len(),
        })
    }

    /// Sum/count/average/min/max over the selection
    ///
    /// Whole rows take precedence over whole columns, then a single cell,
    /// then a rectangle. `None` when nothing is selected.
    pub fn selection_stats(&self) -> Option<Aggregates> {
        let cells = self.sheet.cells();

        let rows = self.selection.selected_rows();
        if !rows.is_empty() {
            return Some(Aggregates::compute(
                rows.iter()
                    .map(|&row| cells.iter_row(row).map(Cell::value)),
            ));
        }
        let columns = self.selection.selected_columns();
        if !columns.is_empty() {
            return Some(Aggregates::compute(
                columns
                    .iter()
                    .map(|&col| cells.iter_column(col).map(Cell::value)),
            ));
        }
        if let Some(addr) = self.selection.selected_cell() {
            return Some(Aggregates::compute([[cells.value_at(addr.row, addr.col)]]));
        }
        self.selection
            .drag_rect()
            .map(|rect| Aggregates::compute([cells.iter_range(rect).map(Cell::value)]))
    }

    // === Structure ===

    fn run_structure(&mut self, command: impl Command + 'static, axis: Axis, index: u32) -> bool {
        if index >= self.sheet.line_count(axis) {
            return false;
        }
        self.run(command, SheetEvent::Structure(axis));
        true
    }

    /// Insert a row, returning `false` (and recording nothing) if `row` is
    /// outside the grid
    pub fn insert_row(&mut self, row: u32) -> bool {
        self.run_structure(InsertLineCommand::row(row), Axis::Row, row)
    }

    /// Delete a row
    pub fn delete_row(&mut self, row: u32) -> bool {
        self.run_structure(DeleteLineCommand::row(row), Axis::Row, row)
    }

    /// Insert a column
    pub fn insert_column(&mut self, col: u16) -> bool {
        self.run_structure(
            InsertLineCommand::column(col),
            Axis::Column,
            u32::from(col),
        )
    }

    /// Delete a column
    pub fn delete_column(&mut self, col: u16) -> bool {
        self.run_structure(
            DeleteLineCommand::column(col),
            Axis::Column,
            u32::from(col),
        )
    }

    /// Insert a row at the selected row, the selected cell's row, or row 0
    pub fn insert_row_at_selection(&mut self) -> u32 {
        let at = self
            .selection
            .selected_row()
            .or_else(|| self.selection.selected_cell().map(|addr| addr.row))
            .unwrap_or(0);
        self.insert_row(at);
        at
    }

    /// Insert a column at the selected column, the selected cell's column, or column 0
    pub fn insert_column_at_selection(&mut self) -> u16 {
        let at = self
            .selection
            .selected_col()
            .or_else(|| self.selection.selected_cell().map(|addr| addr.col))
            .unwrap_or(0);
        self.insert_column(at);
        at
    }

    /// Delete the selected row, then clear the selection
    ///
    /// Does nothing unless a row is explicitly selected.
    pub fn delete_selected_row(&mut self) -> bool {
        let Some(row) = self.selection.selected_row() else {
            return false;
        };
        if !self.delete_row(row) {
            return false;
        }
        self.selection.clear();
        self.notify_selection();
        true
    }

    /// Delete the selected column, then clear the selection
    pub fn delete_selected_column(&mut self) -> bool {
        let Some(col) = self.selection.selected_col() else {
            return false;
        };
        if !self.delete_column(col) {
            return false;
        }
        self.selection.clear();
        self.notify_selection();
        true
    }

    // === Formatting ===

    fn format_selection(&mut self, change: FormatChange) -> usize {
        let targets = self.selected_cells();
        if targets.is_empty() {
            return 0;
        }
        let mut composite = CompositeCommand::new();
        for addr in &targets {
            composite.push(FormatCommand::new(addr.row, addr.col, change));
        }
        self.run(composite, SheetEvent::Format);
        targets.len()
    }

    /// Set the font size of every populated selected cell
    ///
    /// Returns the number of cells changed.
    pub fn apply_font_size(&mut self, size: f64) -> usize {
        self.format_selection(FormatChange::FontSize(size))
    }

    /// Set bold on every populated selected cell
    pub fn set_bold(&mut self, bold: bool) -> usize {
        self.format_selection(FormatChange::Bold(bold))
    }

    /// Set italic on every populated selected cell
    pub fn set_italic(&mut self, italic: bool) -> usize {
        self.format_selection(FormatChange::Italic(italic))
    }

    /// Set the alignment of every populated selected cell
    pub fn set_alignment(&mut self, alignment: Option<HorizontalAlignment>) -> usize {
        self.format_selection(FormatChange::Alignment(alignment))
    }

    // === Sizes ===

    /// Height of a row
    pub fn row_height(&self, row: u32) -> f64 {
        self.sheet.rows().size(row)
    }

    /// Width of a column
    pub fn column_width(&self, col: u16) -> f64 {
        self.sheet.columns().size(u32::from(col))
    }

    /// Set a row height or column width as one undoable step
    pub fn set_size(&mut self, axis: Axis, index: u32, size: f64) -> bool {
        let Some(old) = self.sheet.axis(axis).get(index) else {
            return false;
        };
        self.run(
            ResizeCommand::new(axis, index, old, size),
            SheetEvent::Resize { axis, index, size },
        );
        true
    }

    /// Start an interactive resize of a row or column
    ///
    /// If several lines on the axis are selected and `index` is one of
    /// them, they all follow the drag.
    pub fn begin_resize(&mut self, axis: Axis, index: u32) {
        self.end_resize();

        let selected: Vec<u32> = match axis {
            Axis::Row => self.selection.selected_rows(),
            Axis::Column => self
                .selection
                .selected_columns()
                .into_iter()
                .map(u32::from)
                .collect(),
        };
        let lines = if selected.len() > 1 && selected.contains(&index) {
            selected
        } else {
            vec![index]
        };
        let sizes = self.sheet.axis(axis);
        let commands = lines
            .into_iter()
            .filter_map(|line| {
                sizes
                    .get(line)
                    .map(|size| ResizeCommand::new(axis, line, size, size))
            })
            .collect();

        self.resize = Some(ResizeSession {
            axis,
            commands,
            size: None,
        });
    }

    /// Apply a live size during a resize, returning the size actually used
    ///
    /// Sizes are clamped to the axis minimum. Nothing is recorded until
    /// [`end_resize`](Self::end_resize). Returns `None` when no resize is
    /// active or the resized line does not exist.
    pub fn update_resize(&mut self, size: f64) -> Option<f64> {
        let session = self.resize.as_mut()?;
        let first = session.commands.first()?.index();
        let axis = session.axis;
        let size = size.max(match axis {
            Axis::Row => MIN_ROW_HEIGHT,
            Axis::Column => MIN_COLUMN_WIDTH,
        });
        session.size = Some(size);

        for command in &mut session.commands {
            command.update_new_size(size);
            self.sheet.set_size(axis, command.index(), size);
        }
        self.notifier.notify(SheetEvent::Resize {
            axis,
            index: first,
            size,
        });
        Some(size)
    }

    /// Finish a resize, recording the final size as one undo step
    ///
    /// Returns `false` if no resize was active or the size never changed.
    pub fn end_resize(&mut self) -> bool {
        let Some(session) = self.resize.take() else {
            return false;
        };
        if session.size.is_none() {
            return false;
        }

        let mut commands: Vec<ResizeCommand> = session
            .commands
            .into_iter()
            .filter(|command| command.old_size() != command.new_size())
            .collect();

        match commands.len() {
            0 => false,
            1 => {
                if let Some(command) = commands.pop() {
                    self.history.push_executed(command);
                }
                true
            }
            _ => {
                let mut composite = CompositeCommand::new();
                for command in commands {
                    composite.push(command);
                }
                self.history.push_executed(composite);
                true
            }
        }
    }

    /// Check if a resize is in progress
    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    // === Clipboard ===

    /// Copy the selected cell or rectangle to the clipboard
    ///
    /// For row or column selections the bounding box of their populated
    /// cells is copied. Returns `false` when there is nothing to copy.
    pub fn copy_selection(&mut self) -> bool {
        let Some(range) = self
            .selection
            .selected_range()
            .or_else(|| self.selected_cells_bounds())
        else {
            return false;
        };
        self.history.execute(CopyCommand::new(range), &mut self.sheet);
        true
    }

    fn selected_cells_bounds(&self) -> Option<CellRange> {
        let cells = self.selected_cells();
        let rows = cells.iter().map(|addr| addr.row);
        let cols = cells.iter().map(|addr| addr.col);
        Some(CellRange::from_indices(
            rows.clone().min()?,
            cols.clone().min()?,
            rows.max()?,
            cols.max()?,
        ))
    }

    /// Paste the clipboard at the selected cell or the selection's top-left corner
    pub fn paste(&mut self) -> bool {
        if self.sheet.clipboard().is_empty() {
            return false;
        }
        let Some(origin) = self.selection.selected_range().map(|range| range.start) else {
            return false;
        };
        let command = PasteCommand::from_clipboard(&self.sheet, origin);
        self.run(command, SheetEvent::Cells);
        true
    }

    /// Copied values
    pub fn clipboard_data(&self) -> Vec<Vec<String>> {
        self.sheet.clipboard().data()
    }

    // === History ===

    /// Undo the last command
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.sheet);
        if undone {
            self.notifier.notify(SheetEvent::History);
        }
        undone
    }

    /// Redo the last undone command
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.sheet);
        if redone {
            self.notifier.notify(SheetEvent::History);
        }
        redone
    }

    /// Check if undo is possible
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is possible
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // === Notification ===

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl ChangeListener + 'static) {
        self.notifier.subscribe(listener);
    }

    /// Suppress per-change notifications until [`end_batch`](Self::end_batch)
    pub fn begin_batch(&mut self) {
        self.notifier.begin_batch();
    }

    /// End a batch, emitting a single notification
    pub fn end_batch(&mut self) {
        self.notifier.end_batch();
    }

    // === Import ===

    /// Import rows of JSON scalars starting at A1
    pub fn import_rows(&mut self, rows: &[Vec<serde_json::Value>]) -> ImportSummary {
        import::import_rows(self, rows)
    }

    /// Import a JSON file of rows or records
    pub fn import_json_file(&mut self, path: impl AsRef<Path>) -> Result<ImportSummary> {
        let rows = import::read_json_file(path)?;
        Ok(self.import_rows(&rows))
    }

    // === Search ===

    /// Search populated cells and select the first match
    ///
    /// Clears the selection when nothing matches.
    pub fn search(&mut self, term: &str) -> Option<CellAddress> {
        let found = self.search.find(term, self.sheet.cells());
        self.select_search_result(found)
    }

    /// Select the next match
    pub fn search_next(&mut self) -> Option<CellAddress> {
        let found = self.search.next();
        found.and_then(|addr| self.select_search_result(Some(addr)))
    }

    /// Select the previous match
    pub fn search_prev(&mut self) -> Option<CellAddress> {
        let found = self.search.prev();
        found.and_then(|addr| self.select_search_result(Some(addr)))
    }

    /// Drop search results and clear the selection
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.selection.clear();
        self.notify_selection();
    }

    /// Current search state
    pub fn search_results(&self) -> &Search {
        &self.search
    }

    fn select_search_result(&mut self, found: Option<CellAddress>) -> Option<CellAddress> {
        match found {
            Some(addr) => self.selection.select_cell(addr.row, addr.col),
            None => self.selection.clear(),
        }
        self.notify_selection();
        found
    }
}
