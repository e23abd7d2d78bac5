//! Per-house digit availability tracking.

use sudokode_core::{Cell, Digit, DigitSet};

/// Tracks which digits remain placeable in each row, column, and 3x3 box.
///
/// A digit is legally placeable at a cell iff it is present in all three
/// of the cell's owning availability sets. Placing a digit removes it
/// from those three sets; unplacing reinserts it. Callers are responsible
/// for only placing currently-available digits and only unplacing
/// previously-placed ones — during speculative search every `place` must
/// be paired with an `unplace`, or all subsequent search is corrupted.
///
/// # Examples
///
/// ```
/// use sudokode_core::{Cell, Digit};
/// use sudokode_solver::Constraints;
///
/// let mut constraints = Constraints::new();
/// let cell = Cell::from_row_col(0, 0);
/// assert_eq!(constraints.available(cell).len(), 9);
///
/// constraints.place(cell, Digit::D5);
/// // D5 is now unavailable everywhere in row 0, column 0, and box 0.
/// assert!(!constraints.available(Cell::from_row_col(0, 8)).contains(Digit::D5));
/// assert!(!constraints.available(Cell::from_row_col(8, 0)).contains(Digit::D5));
/// assert!(!constraints.available(Cell::from_row_col(2, 2)).contains(Digit::D5));
///
/// constraints.unplace(cell, Digit::D5);
/// assert_eq!(constraints.available(cell).len(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    boxes: [DigitSet; 9],
}

impl Constraints {
    /// Creates constraint state for an empty grid: every digit available
    /// in every row, column, and box.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: [DigitSet::FULL; 9],
            cols: [DigitSet::FULL; 9],
            boxes: [DigitSet::FULL; 9],
        }
    }

    /// Returns the digits placeable at `cell`: the intersection of its
    /// row's, column's, and box's availability sets.
    #[must_use]
    pub fn available(&self, cell: Cell) -> DigitSet {
        self.rows[cell.row() as usize]
            & self.cols[cell.col() as usize]
            & self.boxes[cell.box_index() as usize]
    }

    /// Records `digit` as placed at `cell`, removing it from the three
    /// owning availability sets.
    pub const fn place(&mut self, cell: Cell, digit: Digit) {
        self.rows[cell.row() as usize].remove(digit);
        self.cols[cell.col() as usize].remove(digit);
        self.boxes[cell.box_index() as usize].remove(digit);
    }

    /// Reverts a previous [`place`](Self::place) of `digit` at `cell`,
    /// reinserting it into the three owning availability sets.
    pub const fn unplace(&mut self, cell: Cell, digit: Digit) {
        self.rows[cell.row() as usize].insert(digit);
        self.cols[cell.col() as usize].insert(digit);
        self.boxes[cell.box_index() as usize].insert(digit);
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_has_everything_available() {
        let constraints = Constraints::new();
        for cell in Cell::all() {
            assert_eq!(constraints.available(cell), DigitSet::FULL);
        }
    }

    #[test]
    fn test_place_removes_from_all_three_houses() {
        let mut constraints = Constraints::new();
        let cell = Cell::from_row_col(4, 4);
        constraints.place(cell, Digit::D7);

        // Same row
        assert!(!constraints.available(Cell::from_row_col(4, 0)).contains(Digit::D7));
        // Same column
        assert!(!constraints.available(Cell::from_row_col(0, 4)).contains(Digit::D7));
        // Same box
        assert!(!constraints.available(Cell::from_row_col(3, 3)).contains(Digit::D7));
        // Unrelated cell keeps it
        assert!(constraints.available(Cell::from_row_col(0, 0)).contains(Digit::D7));
    }

    #[test]
    fn test_unplace_restores_exactly() {
        let mut constraints = Constraints::new();
        let snapshot = constraints.clone();

        let cell = Cell::from_row_col(2, 7);
        constraints.place(cell, Digit::D3);
        assert_ne!(constraints, snapshot);
        constraints.unplace(cell, Digit::D3);
        assert_eq!(constraints, snapshot);
    }

    #[test]
    fn test_available_is_three_way_intersection() {
        let mut constraints = Constraints::new();
        // Row 0 loses D1 via a placement at (0, 8), column 0 loses D2 via
        // (8, 0), box 0 loses D3 via (2, 2). Cell (0, 0) loses all three.
        constraints.place(Cell::from_row_col(0, 8), Digit::D1);
        constraints.place(Cell::from_row_col(8, 0), Digit::D2);
        constraints.place(Cell::from_row_col(2, 2), Digit::D3);

        let available = constraints.available(Cell::from_row_col(0, 0));
        assert_eq!(available.len(), 6);
        assert!(!available.contains(Digit::D1));
        assert!(!available.contains(Digit::D2));
        assert!(!available.contains(Digit::D3));
    }
}
