//! Cell: One character position in the two-dimensional link grid.
//!
//! A cell holds a single `char` and up to four directional relations to
//! neighboring cells. Relations are [`CellId`] indices into the owning
//! `CellArena` rather than pointers, so a released cell can never be
//! dereferenced and every relation is checked at the arena.
//!
//! # Link discipline
//!
//! - `left`/`right` chain the cells of one row.
//! - `up`/`down` connect *row-leading* cells to the leading cells of the
//!   adjacent rows. Non-leading cells never carry vertical relations; a
//!   vertical neighbor is reached by first walking left to the row boundary.

/// Stable handle to a cell inside a `CellArena`.
///
/// A `CellId` stays valid until the cell it names is released. The buffer
/// never hands out ids for released cells; the only long-lived id outside
/// the link graph is the undo slot's anchor, which is overwritten before
/// its cell can be released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(u32);

impl CellId {
    /// Create an id from a raw slot index.
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw slot index.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single character position with four directional relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cell {
    /// The character this cell holds. Row-leading sentinel cells hold a
    /// blank that is excluded from rendered content.
    pub ch: char,
    /// Previous cell in the same row.
    pub left: Option<CellId>,
    /// Next cell in the same row.
    pub right: Option<CellId>,
    /// Leading cell of the previous row (row-leading cells only).
    pub up: Option<CellId>,
    /// Leading cell of the next row (row-leading cells only).
    pub down: Option<CellId>,
}

impl Cell {
    /// A fresh, unlinked cell holding `ch`.
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            left: None,
            right: None,
            up: None,
            down: None,
        }
    }

    /// A fresh row-leading sentinel cell.
    pub const fn sentinel() -> Self {
        Self::new(' ')
    }

    /// Whether this cell anchors a row (no left neighbor).
    pub const fn is_row_leading(&self) -> bool {
        self.left.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_unlinked() {
        let cell = Cell::new('x');
        assert_eq!(cell.ch, 'x');
        assert!(cell.left.is_none());
        assert!(cell.right.is_none());
        assert!(cell.up.is_none());
        assert!(cell.down.is_none());
    }

    #[test]
    fn test_sentinel_is_blank_and_leading() {
        let cell = Cell::sentinel();
        assert_eq!(cell.ch, ' ');
        assert!(cell.is_row_leading());
    }

    #[test]
    fn test_row_leading_depends_on_left_link() {
        let mut cell = Cell::new('a');
        assert!(cell.is_row_leading());
        cell.left = Some(CellId::new(0));
        assert!(!cell.is_row_leading());
    }

    #[test]
    fn test_cell_id_round_trip() {
        let id = CellId::new(42);
        assert_eq!(id.index(), 42);
    }
}
