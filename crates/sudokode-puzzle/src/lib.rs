//! Clue minimization for encoded grids.
//!
//! Given a completed grid, [`minimize`] blanks cells whose value a human
//! solver could re-derive, turning the block into a puzzle while keeping
//! the blanked cells "safe" under two fast sufficiency rules:
//!
//! - **Rule 1 (forced cell)**: after blanking, only one digit remains
//!   available at the cell, so the clue was redundant.
//! - **Rule 2 (positional uniqueness)**: the blanked digit has no other
//!   possible home among the still-blank cells of the cell's row, column,
//!   or box, so the cell is that digit's only remaining position in that
//!   house.
//!
//! Cells are visited in a pseudo-random order derived deterministically
//! from the grid's content hash, so identical grids always minimize to
//! identical puzzles. The rules are sufficient-but-not-necessary
//! shortcuts: the minimizer never reruns the full completability search
//! to confirm the sparse grid still has a unique completion. That is a
//! deliberate cost/precision trade-off.
//!
//! # Examples
//!
//! ```no_run
//! use sudokode_core::Grid;
//! use sudokode_solver::Constraints;
//! use sudokode_puzzle::minimize;
//!
//! # fn completed() -> (Grid, Constraints) { unimplemented!() }
//! let (mut grid, mut constraints) = completed();
//! let removals = minimize(&mut grid, &mut constraints);
//! println!("blanked {} clues", removals.total());
//! ```

use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;
use sudokode_core::{Cell, Digit, Grid};
use sudokode_solver::Constraints;

/// Counters for clues removed by each minimization rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Removals {
    /// Clues removed because only one digit remained available (Rule 1).
    pub rule1: usize,
    /// Clues removed because the digit had no other home in a row,
    /// column, or box (Rule 2).
    pub rule2: usize,
}

impl Removals {
    /// Total number of clues removed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.rule1 + self.rule2
    }
}

/// Blanks redundant clues in a completed grid.
///
/// `constraints` must reflect the grid with all 81 digits placed; on
/// return it reflects only the remaining clues, matching the blanked
/// grid.
///
/// # Panics
///
/// Panics if `grid` is not complete.
pub fn minimize(grid: &mut Grid, constraints: &mut Constraints) -> Removals {
    assert!(grid.is_complete(), "minimizer requires a completed grid");

    let seed = grid.content_hash();
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut order: Vec<u8> = (0..Cell::COUNT).collect();
    order.shuffle(&mut rng);
    log::debug!("minimizing grid, seed = {seed}");

    let mut removals = Removals::default();
    for index in order {
        let cell = Cell::new(index);
        let Some(digit) = grid.get(cell) else {
            unreachable!("each cell is visited exactly once");
        };

        grid.set(cell, None);
        constraints.unplace(cell, digit);

        if constraints.available(cell).len() == 1 {
            log::trace!("rule 1: no other choice at {cell}");
            removals.rule1 += 1;
        } else if row_position_unique(grid, constraints, cell, digit)
            || col_position_unique(grid, constraints, cell, digit)
            || box_position_unique(grid, constraints, cell, digit)
        {
            log::trace!("rule 2: no other position for {digit} around {cell}");
            removals.rule2 += 1;
        } else {
            grid.set(cell, Some(digit));
            constraints.place(cell, digit);
        }
    }
    removals
}

/// Returns `true` if no other still-blank cell in `cell`'s row could hold
/// `digit`.
fn row_position_unique(grid: &Grid, constraints: &Constraints, cell: Cell, digit: Digit) -> bool {
    (0..9)
        .filter(|col| *col != cell.col())
        .map(|col| Cell::from_row_col(cell.row(), col))
        .all(|other| !is_open_position(grid, constraints, other, digit))
}

/// Returns `true` if no other still-blank cell in `cell`'s column could
/// hold `digit`.
fn col_position_unique(grid: &Grid, constraints: &Constraints, cell: Cell, digit: Digit) -> bool {
    (0..9)
        .filter(|row| *row != cell.row())
        .map(|row| Cell::from_row_col(row, cell.col()))
        .all(|other| !is_open_position(grid, constraints, other, digit))
}

/// Returns `true` if no other still-blank cell in `cell`'s box could hold
/// `digit`.
fn box_position_unique(grid: &Grid, constraints: &Constraints, cell: Cell, digit: Digit) -> bool {
    cell.box_cells()
        .filter(|other| *other != cell)
        .all(|other| !is_open_position(grid, constraints, other, digit))
}

fn is_open_position(grid: &Grid, constraints: &Constraints, cell: Cell, digit: Digit) -> bool {
    grid.get(cell).is_none() && constraints.available(cell).contains(digit)
}
