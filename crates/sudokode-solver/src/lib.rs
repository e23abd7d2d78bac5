//! Constraint tracking and exhaustive completability search.
//!
//! The codec fills a grid one cell at a time in linear order. At each
//! step it needs to know not just which digits are *locally* legal at the
//! next cell, but which of them still admit a full valid completion of
//! the remaining cells — otherwise a digit choice could paint the block
//! into a corner. This crate provides both answers:
//!
//! - [`Constraints`] tracks, per row, column, and box, which digits
//!   remain placeable ([`available`], [`place`], [`unplace`]).
//! - [`Constraints::is_completable`] runs a depth-first backtracking
//!   search over the remaining cells.
//! - [`Constraints::candidate_list`] enumerates, in ascending order, the
//!   digits at a cell that survive the completability test. The length of
//!   that list is the mixed radix the codec uses at that cell.
//!
//! [`available`]: Constraints::available
//! [`place`]: Constraints::place
//! [`unplace`]: Constraints::unplace
//!
//! # Examples
//!
//! ```
//! use sudokode_core::Cell;
//! use sudokode_solver::Constraints;
//!
//! let mut constraints = Constraints::new();
//! let candidates = constraints.candidate_list(Cell::new(0));
//! // On an empty grid every digit starts a completable block.
//! assert_eq!(candidates.len(), 9);
//! ```

mod completion;
mod constraints;

pub use self::{completion::CandidateList, constraints::Constraints};
