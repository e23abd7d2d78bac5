//! Linear cell indices and house derivation.
//!
//! The codec walks a grid cell by cell in linear order: cell `n` maps to
//! `(row, col) = (n / 9, n % 9)` and its 3x3 box is
//! `(row / 3) * 3 + col / 3`. [`Cell`] captures that mapping once so the
//! solver, codec, and minimizer all agree on it.

use std::fmt::{self, Display};

/// A cell position on the 9x9 grid, stored as a linear index 0-80.
///
/// # Examples
///
/// ```
/// use sudokode_core::Cell;
///
/// let cell = Cell::new(40); // center of the grid
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 4);
/// assert_eq!(cell.box_index(), 4);
///
/// assert_eq!(Cell::from_row_col(4, 4), cell);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    index: u8,
}

impl Cell {
    /// Number of cells on the grid.
    pub const COUNT: u8 = 81;

    /// Creates a cell from its linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < Self::COUNT);
        Self { index }
    }

    /// Creates a cell from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { index: row * 9 + col }
    }

    /// Returns the linear index of this cell (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the row of this cell (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / 9
    }

    /// Returns the column of this cell (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.index % 9
    }

    /// Returns the index of the 3x3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns an iterator over all 81 cells in linear index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::new)
    }

    /// Returns an iterator over the 9 cells of the 3x3 box containing this
    /// cell, in row-major order.
    ///
    /// The box origin is `(row - row % 3, col - col % 3)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokode_core::Cell;
    ///
    /// let cell = Cell::from_row_col(4, 7);
    /// for other in cell.box_cells() {
    ///     assert_eq!(other.box_index(), cell.box_index());
    /// }
    /// assert_eq!(cell.box_cells().count(), 9);
    /// ```
    pub fn box_cells(self) -> impl Iterator<Item = Self> {
        let row0 = self.row() - self.row() % 3;
        let col0 = self.col() - self.col() % 3;
        (0..9).map(move |i| Self::from_row_col(row0 + i / 3, col0 + i % 3))
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_derivation() {
        let cell = Cell::new(0);
        assert_eq!((cell.row(), cell.col(), cell.box_index()), (0, 0, 0));

        let cell = Cell::new(80);
        assert_eq!((cell.row(), cell.col(), cell.box_index()), (8, 8, 8));

        let cell = Cell::new(13);
        assert_eq!((cell.row(), cell.col(), cell.box_index()), (1, 4, 1));
    }

    #[test]
    fn test_from_row_col_round_trip() {
        for cell in Cell::all() {
            assert_eq!(Cell::from_row_col(cell.row(), cell.col()), cell);
        }
    }

    #[test]
    fn test_all_is_linear_order() {
        let indices: Vec<_> = Cell::all().map(Cell::index).collect();
        assert_eq!(indices.len(), 81);
        assert!(indices.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_box_cells_covers_the_containing_box() {
        // Every cell's box traversal must yield exactly the 9 cells whose
        // box_index matches. This pins the box column origin to
        // `col - col % 3`; an origin of `col % 3` would fail for any cell
        // in box columns 1 and 2.
        for cell in Cell::all() {
            let members: Vec<_> = cell.box_cells().collect();
            assert_eq!(members.len(), 9);
            assert!(members.contains(&cell));
            for other in &members {
                assert_eq!(other.box_index(), cell.box_index());
            }
        }
    }

    #[test]
    fn test_box_cells_right_hand_boxes() {
        // Regression for the box-origin computation: (4, 7) lives in the
        // middle-right box whose origin is (3, 6), not (3, 1).
        let cell = Cell::from_row_col(4, 7);
        let first = cell.box_cells().next().unwrap();
        assert_eq!((first.row(), first.col()), (3, 6));
    }

    #[test]
    #[should_panic(expected = "index < Self::COUNT")]
    fn test_out_of_range_index_panics() {
        let _ = Cell::new(81);
    }
}
