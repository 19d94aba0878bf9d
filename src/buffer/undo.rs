//! One-slot undo history.
//!
//! The buffer retains exactly one step of reversal. The slot records the
//! *kind* of the last mutating operation; only a delete carries a payload
//! (the removed character and the cell it was removed next to). Performing
//! an undo and then any other mutation permanently discards the ability to
//! reach further back.

use super::cell::CellId;

/// The single retained record of the most recent mutating operation.
///
/// # The assume-insert boundary
///
/// `Insert` does not remember *which* cell was inserted. Undoing it removes
/// whatever cell the cursor currently sits on, guarded only by the
/// cursor-has-a-left-neighbor check. Calling undo twice in a row therefore
/// removes an arbitrary cell on the second call; that is the documented
/// one-step recovery boundary, not a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum UndoSlot {
    /// No mutation has happened yet; undo is a no-op.
    #[default]
    Empty,
    /// Last mutation inserted a cell (or an earlier undo already consumed
    /// its payload). Undo removes the cell at the cursor.
    Insert,
    /// Last mutation deleted a cell. Undo restores it.
    Delete {
        /// The character the deleted cell held.
        ch: char,
        /// The cell immediately left of the removal point; the restored
        /// cell is spliced back to its right.
        anchor: CellId,
    },
}

impl UndoSlot {
    /// Whether the slot still holds a restorable delete.
    #[cfg(test)]
    pub const fn is_delete(&self) -> bool {
        matches!(self, Self::Delete { .. })
    }
}
