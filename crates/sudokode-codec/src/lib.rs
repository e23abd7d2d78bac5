//! Mixed-radix codec embedding text in completed sudoku grids.
//!
//! A message is packed into one unbounded-precision integer, 7 bits per
//! character, then consumed across successive 81-cell blocks: at each
//! cell the number of digits that still admit a full grid completion
//! becomes the radix, the payload is divided by it, and the remainder
//! picks the digit to place. Decoding replays the same walk over the
//! finished grids and folds the recovered digits back together.
//!
//! # Examples
//!
//! ```
//! use sudokode_codec::Coder;
//!
//! let mut coder = Coder::new();
//! let grids = coder.encode("SECRET")?;
//! let message = coder.decode(&grids)?;
//! assert_eq!(message, "SECRET");
//! # Ok::<(), sudokode_codec::CodecError>(())
//! ```

mod coder;
pub mod payload;
pub mod stats;

use sudokode_core::Cell;

pub use self::{
    coder::{Chunk, Coder, pack_message},
    payload::Payload,
    stats::Stats,
};

/// Error encoding or decoding a message.
///
/// All variants are non-retryable. The first two are caused by user
/// input; [`NoCandidates`](Self::NoCandidates) is an internal invariant
/// violation that indicates a defect rather than bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CodecError {
    /// The message contains a character with a code point above 127.
    #[display("non-ASCII character: {ch:?}")]
    NonAsciiCharacter {
        /// The offending character.
        ch: char,
    },
    /// A grid presented for decoding contains blank cells.
    #[display("unsolved sudoku grid (must be solved before decoding)")]
    IncompleteGrid,
    /// A grid's digit is not in the candidate list at its cell, meaning
    /// the grid was not produced by this codec or was corrupted.
    #[display("digit at cell {cell} does not admit a completion; not an encoded grid")]
    SymbolNotViable {
        /// The cell holding the unviable digit.
        cell: Cell,
    },
    /// A candidate list came up empty during encoding or decoding.
    /// Blocks built by this codec are always completable by
    /// construction, so this indicates a logic defect.
    #[display("empty candidate list at cell {cell}; this is a bug")]
    NoCandidates {
        /// The cell with no candidates.
        cell: Cell,
    },
}
