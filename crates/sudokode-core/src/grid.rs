//! The 9x9 grid and its boxed ASCII text form.
//!
//! A [`Grid`] is one block of the codec: 81 cells each holding a digit or a
//! blank. Completed grids render and parse in the boxed layout:
//!
//! ```text
//! +---+---+---+
//! |123|456|789|
//! |456|789|123|
//! |789|123|456|
//! +---+---+---+
//! |234|567|891|
//! |567|891|234|
//! |891|234|567|
//! +---+---+---+
//! |345|678|912|
//! |678|912|345|
//! |912|345|678|
//! +---+---+---+
//! ```
//!
//! Blank cells render as spaces. Parsing rejects blanks — decoding only
//! consumes completed grids — with a dedicated error so the caller can
//! report "unsolved grid" rather than a generic parse failure.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet};

const DIVIDER: &str = "+---+---+---+";

/// A 9x9 grid of cells, each holding a digit or a blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates a new grid with every cell blank.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `cell`, or `None` if the cell is blank.
    #[must_use]
    pub const fn get(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index() as usize]
    }

    /// Sets or blanks the digit at `cell`.
    pub const fn set(&mut self, cell: Cell, digit: Option<Digit>) {
        self.cells[cell.index() as usize] = digit;
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of blank cells.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if the grid is complete and every row, column, and
    /// box contains all nine digits.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        let mut rows = [DigitSet::EMPTY; 9];
        let mut cols = [DigitSet::EMPTY; 9];
        let mut boxes = [DigitSet::EMPTY; 9];
        for cell in Cell::all() {
            let Some(digit) = self.get(cell) else {
                return false;
            };
            rows[cell.row() as usize].insert(digit);
            cols[cell.col() as usize].insert(digit);
            boxes[cell.box_index() as usize].insert(digit);
        }
        rows.iter()
            .chain(&cols)
            .chain(&boxes)
            .all(|set| *set == DigitSet::FULL)
    }

    /// Computes the positional content hash of the grid.
    ///
    /// The hash is `sum(r * sum(c * code))` over all rows `r` and columns
    /// `c`, where `code` is the ASCII code of the cell's character (a digit
    /// character, or a space for blanks). Identical grids always yield
    /// identical hashes, which is what makes seeded puzzle minimization
    /// reproducible.
    #[must_use]
    pub fn content_hash(&self) -> u64 {
        let mut total = 0;
        for row in 0..9 {
            let mut row_sum = 0;
            for col in 0..9 {
                let code = match self.get(Cell::from_row_col(row, col)) {
                    Some(digit) => u64::from(b'0' + digit.value()),
                    None => u64::from(b' '),
                };
                row_sum += u64::from(col) * code;
            }
            total += u64::from(row) * row_sum;
        }
        total
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row % 3 == 0 {
                writeln!(f, "{DIVIDER}")?;
            }
            for col in 0..9 {
                if col % 3 == 0 {
                    write!(f, "|")?;
                }
                match self.get(Cell::from_row_col(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, " ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{DIVIDER}")
    }
}

/// Error parsing a grid from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// A character that is neither a digit, layout decoration, nor blank.
    #[display("invalid character {ch:?} in sudoku grid")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// A blank cell; grids must be solved before decoding.
    #[display("unsolved sudoku grid (must be solved before decoding)")]
    UnsolvedGrid,
    /// The text did not contain exactly 81 digits.
    #[display("wrong number of digits in sudoku grid: {count}")]
    WrongCellCount {
        /// Number of digits found.
        count: usize,
    },
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits = Vec::with_capacity(81);
        for ch in s.chars() {
            if let Some(digit) = Digit::from_ascii(ch) {
                digits.push(digit);
            } else {
                match ch {
                    '+' | '-' | '|' | '\n' | '\r' => {}
                    ' ' | '*' => return Err(GridParseError::UnsolvedGrid),
                    _ => return Err(GridParseError::InvalidCharacter { ch }),
                }
            }
        }
        if digits.len() != 81 {
            return Err(GridParseError::WrongCellCount {
                count: digits.len(),
            });
        }
        let mut grid = Self::new();
        for (cell, digit) in Cell::all().zip(digits) {
            grid.set(cell, Some(digit));
        }
        Ok(grid)
    }
}
