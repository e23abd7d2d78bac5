//! Depth-first completability search and candidate enumeration.

use sudokode_core::{Cell, Digit};
use tinyvec::ArrayVec;

use crate::constraints::Constraints;

/// Ascending list of digits at a cell that admit a full completion.
///
/// Its length is the mixed radix the codec uses at that cell.
pub type CandidateList = ArrayVec<[Digit; 9]>;

impl Constraints {
    /// Returns `true` if cells `from..81` (linear order) can all be
    /// filled validly given the current state.
    ///
    /// Digits are tried in ascending order, depth first, short-circuiting
    /// on the first completion found; state is fully restored before
    /// returning. Worst-case cost is exponential in the branching factor
    /// — typical sudoku constraint density keeps the practical blow-up
    /// low, but callers must not assume bounded latency.
    #[must_use]
    pub fn is_completable(&mut self, from: u8) -> bool {
        if from == Cell::COUNT {
            return true;
        }
        let cell = Cell::new(from);
        for digit in self.available(cell) {
            self.place(cell, digit);
            let found = self.is_completable(from + 1);
            self.unplace(cell, digit);
            if found {
                return true;
            }
        }
        false
    }

    /// Returns the digits at `cell` that are both currently available and
    /// leave the rest of the block completable, in ascending order.
    ///
    /// This is strictly stronger than [`available`](Self::available): a
    /// digit can be locally legal yet excluded here because no full
    /// completion follows it. The codec needs the stronger guarantee so
    /// that every digit it emits corresponds to a reachable full grid.
    ///
    /// State is restored exactly before returning.
    #[must_use]
    pub fn candidate_list(&mut self, cell: Cell) -> CandidateList {
        let mut candidates = CandidateList::new();
        for digit in self.available(cell) {
            self.place(cell, digit);
            if self.is_completable(cell.index() + 1) {
                candidates.push(digit);
            }
            self.unplace(cell, digit);
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use sudokode_core::DigitSet;

    use super::*;

    #[test]
    fn test_empty_grid_is_completable() {
        let mut constraints = Constraints::new();
        assert!(constraints.is_completable(0));
    }

    #[test]
    fn test_base_case_is_completable() {
        let mut constraints = Constraints::new();
        assert!(constraints.is_completable(Cell::COUNT));
    }

    #[test]
    fn test_search_restores_state() {
        let mut constraints = Constraints::new();
        constraints.place(Cell::from_row_col(0, 0), Digit::D5);
        let snapshot = constraints.clone();

        assert!(constraints.is_completable(1));
        assert_eq!(constraints, snapshot);

        let _ = constraints.candidate_list(Cell::new(1));
        assert_eq!(constraints, snapshot);
    }

    #[test]
    fn test_candidate_list_is_ascending_and_full_on_empty_grid() {
        let mut constraints = Constraints::new();
        let candidates = constraints.candidate_list(Cell::new(0));
        assert_eq!(candidates.as_slice(), Digit::ALL.as_slice());
    }

    #[test]
    fn test_candidate_list_forced_and_dead_end_cells() {
        // Fill row 0 with 1..=8, leaving (0, 8). Only 9 remains there.
        let mut constraints = Constraints::new();
        for (col, digit) in (0..8).zip(Digit::ALL) {
            constraints.place(Cell::from_row_col(0, col), digit);
        }
        let candidates = constraints.candidate_list(Cell::from_row_col(0, 8));
        assert_eq!(candidates.as_slice(), &[Digit::D9]);

        // Now make 9 unavailable in that column; no candidate survives.
        constraints.place(Cell::from_row_col(8, 8), Digit::D9);
        assert_eq!(constraints.available(Cell::from_row_col(0, 8)), DigitSet::EMPTY);
        let candidates = constraints.candidate_list(Cell::from_row_col(0, 8));
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_prefix_walk_always_has_candidates() {
        // Walking cells in linear order and always taking the first
        // candidate must never hit an empty candidate list.
        let mut constraints = Constraints::new();
        for cell in Cell::all() {
            let candidates = constraints.candidate_list(cell);
            assert!(!candidates.is_empty(), "no candidates at {cell}");
            constraints.place(cell, candidates[0]);
        }
    }
}
