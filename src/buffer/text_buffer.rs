//! `LinkedTextBuffer`: The editable two-dimensional cell grid.
//!
//! The buffer owns a graph of character cells through its [`CellArena`] and
//! tracks three positions: the leading cell of the first row (`head`), the
//! leading cell of the cursor's row, and the cursor cell itself. Every row
//! starts with one blank sentinel cell that anchors the row and is excluded
//! from rendered content; `cursor_pos == 0` means the cursor sits on the
//! sentinel, before the first character.
//!
//! All operations are total: where a neighbor is missing (row boundary,
//! empty history) the operation degrades to a no-op instead of failing. No
//! input sequence can leave a relation dangling, and a cell is released in
//! the same operation that unlinks it.

use super::arena::CellArena;
use super::cell::CellId;
use super::undo::UndoSlot;
use crate::input::Command;
use std::fmt;
use std::fmt::Write as _;

/// A text buffer built as a two-dimensional linked structure of cells.
///
/// # Example
///
/// ```
/// use gridpad::LinkedTextBuffer;
///
/// let mut buffer = LinkedTextBuffer::new();
/// buffer.insert_char('H');
/// buffer.insert_char('i');
/// assert_eq!(buffer.to_string(), "Hi");
///
/// buffer.delete_char();
/// assert_eq!(buffer.to_string(), "H");
///
/// buffer.undo();
/// assert_eq!(buffer.to_string(), "Hi");
/// ```
#[derive(Debug, Clone)]
pub struct LinkedTextBuffer {
    /// Owner of every cell reachable from this buffer.
    arena: CellArena,
    /// Leading sentinel of the first row.
    head: CellId,
    /// Leading sentinel of the cursor's row.
    current_line: CellId,
    /// The cell at the cursor. Editing happens to its right.
    current_char: CellId,
    /// Characters left of the cursor in its row. Kept in lockstep with
    /// `current_char`; vertical moves re-derive it with clamping.
    cursor_pos: usize,
    /// One-slot operation history.
    history: UndoSlot,
}

impl LinkedTextBuffer {
    /// Create a buffer with one row, one sentinel cell, cursor on it.
    pub fn new() -> Self {
        let mut arena = CellArena::new();
        let head = arena.alloc_sentinel();
        Self {
            arena,
            head,
            current_line: head,
            current_char: head,
            cursor_pos: 0,
            history: UndoSlot::Empty,
        }
    }

    /// Release every cell and re-establish the freshly-created state.
    pub fn clear(&mut self) {
        self.arena.clear();
        let head = self.arena.alloc_sentinel();
        self.head = head;
        self.current_line = head;
        self.current_char = head;
        self.cursor_pos = 0;
        self.history = UndoSlot::Empty;
    }

    /// Insert `ch` immediately to the right of the cursor and move onto it.
    ///
    /// The new cell is spliced into the horizontal chain; it carries no
    /// vertical relations (only row-leading cells do). Records `Insert` in
    /// the history slot, discarding any pending delete payload.
    pub fn insert_char(&mut self, ch: char) {
        let cursor = self.current_char;
        let right = self.arena.cell(cursor).right;

        let id = self.arena.alloc(ch);
        {
            let cell = self.arena.cell_mut(id);
            cell.left = Some(cursor);
            cell.right = right;
        }
        self.arena.cell_mut(cursor).right = Some(id);
        if let Some(r) = right {
            self.arena.cell_mut(r).left = Some(id);
        }

        self.current_char = id;
        self.cursor_pos += 1;
        self.history = UndoSlot::Insert;
    }

    /// Remove the cursor cell and move the cursor to its left neighbor.
    ///
    /// No-op when the cursor sits on the row sentinel (nothing to its
    /// left). Records the removed character and the new cursor cell in the
    /// history slot.
    pub fn delete_char(&mut self) {
        let cursor = self.current_char;
        let Some(left) = self.arena.cell(cursor).left else {
            return;
        };
        let right = self.arena.cell(cursor).right;
        let ch = self.arena.cell(cursor).ch;

        self.arena.cell_mut(left).right = right;
        if let Some(r) = right {
            self.arena.cell_mut(r).left = Some(left);
        }
        self.arena.release(cursor);

        self.current_char = left;
        self.cursor_pos -= 1;
        self.history = UndoSlot::Delete { ch, anchor: left };
    }

    /// Reverse the last mutating operation. One step only.
    ///
    /// A recorded delete is restored at the exact adjacency it was removed
    /// from: the saved character is spliced back to the right of the cell
    /// the cursor landed on when the delete happened, and the cursor moves
    /// onto the restored cell (teleporting back if it navigated away).
    ///
    /// Anything else is treated as an insert and undone by removing the
    /// cell currently at the cursor, guarded only by the left-neighbor
    /// check; a second consecutive undo therefore removes whatever cell
    /// the cursor sits on. No-op before the first mutation.
    pub fn undo(&mut self) {
        match self.history {
            UndoSlot::Empty => {}
            UndoSlot::Delete { ch, anchor } => {
                let right = self.arena.cell(anchor).right;

                let id = self.arena.alloc(ch);
                {
                    let cell = self.arena.cell_mut(id);
                    cell.left = Some(anchor);
                    cell.right = right;
                }
                self.arena.cell_mut(anchor).right = Some(id);
                if let Some(r) = right {
                    self.arena.cell_mut(r).left = Some(id);
                }

                self.current_char = id;
                let (line, pos) = self.row_origin_and_offset(id);
                self.current_line = line;
                self.cursor_pos = pos;
                self.history = UndoSlot::Insert;
            }
            UndoSlot::Insert => {
                let cursor = self.current_char;
                let Some(left) = self.arena.cell(cursor).left else {
                    return;
                };
                let right = self.arena.cell(cursor).right;

                self.arena.cell_mut(left).right = right;
                if let Some(r) = right {
                    self.arena.cell_mut(r).left = Some(left);
                }
                self.arena.release(cursor);

                self.current_char = left;
                self.cursor_pos -= 1;
                // The slot stays Insert: one-step history, by construction.
            }
        }
    }

    /// Create a new row immediately below the cursor's row and move onto
    /// its sentinel.
    ///
    /// Vertical relations are rewired between row-leading cells only. The
    /// history slot is left untouched; a pending delete stays restorable.
    pub fn insert_newline(&mut self) {
        let line = self.current_line;
        let below = self.arena.cell(line).down;

        let id = self.arena.alloc_sentinel();
        {
            let cell = self.arena.cell_mut(id);
            cell.up = Some(line);
            cell.down = below;
        }
        self.arena.cell_mut(line).down = Some(id);
        if let Some(b) = below {
            self.arena.cell_mut(b).up = Some(id);
        }

        self.current_line = id;
        self.current_char = id;
        self.cursor_pos = 0;
    }

    /// Move the cursor one cell left. No-op at the row sentinel.
    pub fn move_left(&mut self) {
        if let Some(left) = self.arena.cell(self.current_char).left {
            self.current_char = left;
            self.cursor_pos -= 1;
        }
    }

    /// Move the cursor one cell right. No-op at the row end.
    pub fn move_right(&mut self) {
        if let Some(right) = self.arena.cell(self.current_char).right {
            self.current_char = right;
            self.cursor_pos += 1;
        }
    }

    /// Move the cursor to the row above, preserving the column where the
    /// row is long enough and clamping to the row end otherwise. No-op on
    /// the first row.
    pub fn move_up(&mut self) {
        if let Some(above) = self.arena.cell(self.current_line).up {
            self.land_on_row(above);
        }
    }

    /// Move the cursor to the row below, with the same column behavior as
    /// [`move_up`](Self::move_up). No-op on the last row.
    pub fn move_down(&mut self) {
        if let Some(below) = self.arena.cell(self.current_line).down {
            self.land_on_row(below);
        }
    }

    /// Apply one decoded command to the buffer.
    ///
    /// Returns `false` for [`Command::Stop`], which is addressed to the
    /// session loop rather than the buffer; `true` otherwise.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::InsertChar(ch) => self.insert_char(ch),
            Command::DeleteChar => self.delete_char(),
            Command::NewLine => self.insert_newline(),
            Command::Undo => self.undo(),
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Stop => return false,
        }
        true
    }

    /// Lazy, restartable iterator over rows, top to bottom.
    ///
    /// Each item iterates the row's characters left to right, sentinel
    /// excluded. Traversal follows row-leading vertical links only and is
    /// capped at the live-cell count, so it terminates on any link graph.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            buffer: self,
            next_row: Some(self.head),
            remaining: self.arena.live(),
        }
    }

    /// Number of rows in the buffer. At least 1.
    pub fn line_count(&self) -> usize {
        self.rows().count()
    }

    /// The rendered text of row `index`, or `None` past the last row.
    pub fn line_text(&self, index: usize) -> Option<String> {
        self.rows().nth(index).map(Iterator::collect)
    }

    /// Cursor location as `(row index, characters left of the cursor)`.
    pub fn cursor_position(&self) -> (usize, usize) {
        let mut row = 0;
        let mut id = self.head;
        let mut remaining = self.arena.live();
        while id != self.current_line && remaining > 0 {
            remaining -= 1;
            match self.arena.cell(id).down {
                Some(next) => {
                    id = next;
                    row += 1;
                }
                None => break,
            }
        }
        (row, self.cursor_pos)
    }

    /// Number of live cells, sentinels included. Exposed for leak
    /// accounting in tests and benches.
    pub fn cell_count(&self) -> usize {
        self.arena.live()
    }

    /// Park the cursor on `row`'s cell at the remembered column, clamped
    /// to the row end.
    fn land_on_row(&mut self, row: CellId) {
        debug_assert!(self.arena.cell(row).is_row_leading());
        self.current_line = row;
        let mut cell = row;
        let mut pos = 0;
        while pos < self.cursor_pos {
            match self.arena.cell(cell).right {
                Some(right) => {
                    cell = right;
                    pos += 1;
                }
                None => break,
            }
        }
        self.current_char = cell;
        self.cursor_pos = pos;
    }

    /// Walk left from `id` to the row sentinel, returning it and the
    /// number of steps taken.
    fn row_origin_and_offset(&self, id: CellId) -> (CellId, usize) {
        let mut cell = id;
        let mut offset = 0;
        while let Some(left) = self.arena.cell(cell).left {
            cell = left;
            offset += 1;
        }
        (cell, offset)
    }
}

impl Default for LinkedTextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LinkedTextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                f.write_char('\n')?;
            }
            for ch in row {
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

/// Iterator over a buffer's rows, produced by [`LinkedTextBuffer::rows`].
#[derive(Debug)]
pub struct Rows<'a> {
    buffer: &'a LinkedTextBuffer,
    next_row: Option<CellId>,
    /// Rows left to yield at most; bounds traversal on any link graph.
    remaining: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = RowChars<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let row = self.next_row?;
        let cell = self.buffer.arena.cell(row);
        self.next_row = cell.down;
        Some(RowChars {
            buffer: self.buffer,
            next_cell: cell.right,
            remaining: self.buffer.arena.live(),
        })
    }
}

/// Iterator over one row's characters, sentinel excluded.
#[derive(Debug)]
pub struct RowChars<'a> {
    buffer: &'a LinkedTextBuffer,
    next_cell: Option<CellId>,
    /// Cells left to yield at most; bounds traversal on any link graph.
    remaining: usize,
}

impl Iterator for RowChars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let id = self.next_cell?;
        let cell = self.buffer.arena.cell(id);
        self.next_cell = cell.right;
        Some(cell.ch)
    }
}
