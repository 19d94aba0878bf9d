//! `CellArena`: Slab-style owner of every cell in a buffer.
//!
//! The arena is the single allocation and release point for cells. Slots are
//! recycled through a free list, so a long editing session does not grow the
//! backing `Vec` beyond its peak row content. A released slot stays vacant
//! until it is handed out again, and accessing a vacant slot is a logic bug
//! that fails loudly rather than corrupting the link graph.

use super::cell::{Cell, CellId};

/// One arena slot: either a live cell or a vacancy awaiting reuse.
#[derive(Debug, Clone)]
enum Slot {
    Occupied(Cell),
    Vacant,
}

/// Owns all cells reachable from a buffer.
///
/// Allocation returns a [`CellId`] whose slot stays put for the cell's whole
/// lifetime; relations between cells are stored as ids and resolved here.
#[derive(Debug, Clone)]
pub(crate) struct CellArena {
    /// Slot storage. Indices are `CellId` values.
    slots: Vec<Slot>,
    /// Indices of vacant slots, most recently released last.
    free: Vec<u32>,
    /// Number of occupied slots.
    live: usize,
}

impl CellArena {
    /// Create an empty arena.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Number of live cells.
    #[inline]
    pub const fn live(&self) -> usize {
        self.live
    }

    /// Allocate a fresh unlinked cell holding `ch`.
    ///
    /// Reuses a vacant slot when one exists.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` slots.
    pub fn alloc(&mut self, ch: char) -> CellId {
        self.insert(Cell::new(ch))
    }

    /// Allocate a fresh row-leading sentinel cell.
    pub fn alloc_sentinel(&mut self) -> CellId {
        self.insert(Cell::sentinel())
    }

    fn insert(&mut self, cell: Cell) -> CellId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            self.slots[index as usize] = Slot::Occupied(cell);
            return CellId::new(index);
        }
        let index = u32::try_from(self.slots.len()).expect("arena exceeded u32::MAX slots");
        self.slots.push(Slot::Occupied(cell));
        CellId::new(index)
    }

    /// Release a cell, returning its slot to the free list.
    ///
    /// The caller must have already rewritten every relation that named
    /// `id`; after this call the id is dead and must not be used again.
    ///
    /// # Panics
    /// Panics if `id` names a vacant slot (double release).
    pub fn release(&mut self, id: CellId) {
        let slot = &mut self.slots[id.index()];
        assert!(
            matches!(slot, Slot::Occupied(_)),
            "double release of cell {id:?}"
        );
        *slot = Slot::Vacant;
        self.free.push(u32::try_from(id.index()).expect("slot index fits u32"));
        self.live -= 1;
    }

    /// Release every cell at once.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }

    /// Borrow the cell named by `id`.
    ///
    /// # Panics
    /// Panics if `id` names a vacant slot.
    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        match &self.slots[id.index()] {
            Slot::Occupied(cell) => cell,
            Slot::Vacant => panic!("released cell {id:?} accessed"),
        }
    }

    /// Mutably borrow the cell named by `id`.
    ///
    /// # Panics
    /// Panics if `id` names a vacant slot.
    #[inline]
    pub fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        match &mut self.slots[id.index()] {
            Slot::Occupied(cell) => cell,
            Slot::Vacant => panic!("released cell {id:?} accessed"),
        }
    }

    /// Whether `id` names a live cell.
    #[cfg(test)]
    pub fn contains(&self, id: CellId) -> bool {
        matches!(self.slots.get(id.index()), Some(Slot::Occupied(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_read_back() {
        let mut arena = CellArena::new();
        let id = arena.alloc('a');
        assert_eq!(arena.cell(id).ch, 'a');
        assert_eq!(arena.live(), 1);
    }

    #[test]
    fn test_release_recycles_slot() {
        let mut arena = CellArena::new();
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        arena.release(a);
        assert_eq!(arena.live(), 1);
        assert!(!arena.contains(a));

        // The vacated slot is reused before the Vec grows.
        let c = arena.alloc('c');
        assert_eq!(c.index(), a.index());
        assert_eq!(arena.cell(c).ch, 'c');
        assert_eq!(arena.cell(b).ch, 'b');
        assert_eq!(arena.live(), 2);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut arena = CellArena::new();
        let a = arena.alloc('a');
        arena.alloc('b');
        arena.clear();
        assert_eq!(arena.live(), 0);
        assert!(!arena.contains(a));
    }

    #[test]
    #[should_panic(expected = "double release")]
    fn test_double_release_panics() {
        let mut arena = CellArena::new();
        let id = arena.alloc('a');
        arena.release(id);
        arena.release(id);
    }

    #[test]
    #[should_panic(expected = "released cell")]
    fn test_stale_access_panics() {
        let mut arena = CellArena::new();
        let id = arena.alloc('a');
        arena.release(id);
        let _ = arena.cell(id);
    }

    #[test]
    fn test_links_survive_unrelated_release() {
        let mut arena = CellArena::new();
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        let c = arena.alloc('c');
        arena.cell_mut(a).right = Some(b);
        arena.cell_mut(b).left = Some(a);
        arena.cell_mut(b).right = Some(c);
        arena.cell_mut(c).left = Some(b);

        arena.cell_mut(b).right = None;
        arena.release(c);

        assert_eq!(arena.cell(a).right, Some(b));
        assert_eq!(arena.cell(b).left, Some(a));
        assert_eq!(arena.cell(b).right, None);
    }
}
