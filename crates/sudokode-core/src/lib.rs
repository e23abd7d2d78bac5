//! Core data structures for the sudokode codec.
//!
//! This crate provides the fundamental types shared by the solver, codec,
//! and puzzle minimizer:
//!
//! - [`digit`]: Type-safe representation of the grid alphabet (digits 1-9)
//! - [`digit_set`]: A fixed-size bitset over the alphabet with guaranteed
//!   ascending iteration order
//! - [`cell`]: Linear cell indices (0-80) with row/column/box derivation
//! - [`grid`]: The 9x9 grid, its boxed ASCII text form, and the positional
//!   content hash used to seed deterministic puzzle minimization
//!
//! # Examples
//!
//! ```
//! use sudokode_core::{Cell, Digit, DigitSet, Grid};
//!
//! let mut grid = Grid::new();
//! grid.set(Cell::new(0), Some(Digit::D5));
//! assert_eq!(grid.get(Cell::new(0)), Some(Digit::D5));
//!
//! let set = DigitSet::from_iter([Digit::D9, Digit::D1]);
//! let ascending: Vec<_> = set.iter().collect();
//! assert_eq!(ascending, vec![Digit::D1, Digit::D9]);
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;

pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridParseError},
};
