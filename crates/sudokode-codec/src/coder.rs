//! Message encoding and decoding over grid blocks.

use sudokode_core::{Cell, Grid};
use sudokode_solver::Constraints;

use crate::{CodecError, payload::Payload, stats::Stats};

/// One cell's encoding decision: the radix used and the zero-based index
/// of the chosen digit within the cell's candidate list.
///
/// The sequence of chunks across a block's 81 cells is the mixed-radix
/// representation of the payload slice consumed by that block,
/// least-significant cell first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Number of viable candidates at the cell (1-9).
    pub radix: u8,
    /// Zero-based index of the chosen digit (`< radix`).
    pub digit: u8,
}

/// Encodes messages into grids and decodes them back.
///
/// A `Coder` carries the puzzle-mode flag and accumulates [`Stats`]
/// across calls. Encoding and decoding are deterministic: the same
/// message and flags always produce the same grid sequence.
///
/// # Examples
///
/// ```
/// use sudokode_codec::Coder;
///
/// let mut coder = Coder::new();
/// let grids = coder.encode("A")?;
/// assert_eq!(grids.len(), 1);
///
/// let message = coder.decode(&grids)?;
/// assert_eq!(message, "A");
/// # Ok::<(), sudokode_codec::CodecError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Coder {
    puzzle_mode: bool,
    stats: Stats,
}

impl Coder {
    /// Creates a coder producing fully filled-in grids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether encoded blocks are minimized into puzzles.
    ///
    /// Puzzle grids contain blanks and cannot be decoded until solved.
    #[must_use]
    pub fn with_puzzle_mode(mut self, enabled: bool) -> Self {
        self.puzzle_mode = enabled;
        self
    }

    /// Returns the statistics accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Encodes a 7-bit-ASCII message into a sequence of grids.
    ///
    /// The message is packed MSB-first, 7 bits per character, into one
    /// payload integer, then consumed one block at a time until the
    /// payload reaches zero. An empty message — or one whose packed
    /// payload is zero, such as a single NUL — yields zero grids; this
    /// is a documented limitation, not an omission: leading all-zero
    /// payload content is never materialized into an extra block.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::NonAsciiCharacter`] if the message contains
    /// a character with code point above 127.
    pub fn encode(&mut self, message: &str) -> Result<Vec<Grid>, CodecError> {
        self.stats.chars += message.chars().count();
        self.stats.bits += 7 * message.chars().count();

        let mut payload = pack_message(message)?;
        let mut grids = Vec::new();
        while !payload.is_zero() {
            let (grid, _chunks) = self.encode_block(&mut payload)?;
            grids.push(grid);
        }
        log::debug!("encoded {} block(s)", grids.len());
        Ok(grids)
    }

    /// Encodes one block, consuming part of `payload`.
    ///
    /// For each cell in linear order the candidate list is computed, its
    /// length becomes that cell's radix `m`, and the payload is reduced
    /// by `m` with the remainder selecting the digit to place. The digit
    /// placement is permanent: it becomes the real grid state driving
    /// every later candidate list in the block.
    ///
    /// Returns the finished grid (minimized if puzzle mode is on) and
    /// the 81 chunks recorded along the way.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::NoCandidates`] if a cell's candidate list
    /// comes up empty. Every prefix this codec constructs is completable
    /// by construction, so that indicates a defect, not bad input.
    pub fn encode_block(&mut self, payload: &mut Payload) -> Result<(Grid, Vec<Chunk>), CodecError> {
        let mut constraints = Constraints::new();
        let mut grid = Grid::new();
        let mut chunks = Vec::with_capacity(usize::from(Cell::COUNT));
        self.stats.blocks += 1;

        for cell in Cell::all() {
            let candidates = constraints.candidate_list(cell);
            if candidates.is_empty() {
                return Err(CodecError::NoCandidates { cell });
            }
            #[expect(clippy::cast_possible_truncation)]
            let radix = candidates.len() as u8;

            let entropy = f64::from(radix).log2();
            if payload.is_zero() {
                self.stats.entropy_unused += entropy;
            } else {
                self.stats.entropy_used += entropy;
            }

            #[expect(clippy::cast_possible_truncation)]
            let digit = payload.div_rem_small(u32::from(radix)) as u8;
            chunks.push(Chunk { radix, digit });

            let symbol = candidates[usize::from(digit)];
            log::trace!("cell {cell}: m = {radix}, digit = {digit}, symbol = {symbol}");
            grid.set(cell, Some(symbol));
            constraints.place(cell, symbol);
        }

        if self.puzzle_mode {
            let removals = sudokode_puzzle::minimize(&mut grid, &mut constraints);
            self.stats.removed_rule1 += removals.rule1;
            self.stats.removed_rule2 += removals.rule2;
        }
        Ok((grid, chunks))
    }

    /// Decodes a sequence of completed grids back into the message.
    ///
    /// Grids must be supplied in encode order. Chunks are recovered
    /// block by block, then folded in reverse to rebuild the payload
    /// (undoing the divmod reduction, which peeled off the
    /// least-significant digit first), and finally unpacked 7 bits at a
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::IncompleteGrid`] if a grid contains blanks,
    /// or [`CodecError::SymbolNotViable`] if a grid was not produced by
    /// this codec.
    pub fn decode(&mut self, grids: &[Grid]) -> Result<String, CodecError> {
        let mut chunks = Vec::new();
        for grid in grids {
            self.decode_block(grid, &mut chunks)?;
        }

        let mut payload = Payload::new();
        for chunk in chunks.iter().rev() {
            payload.mul_add_small(u32::from(chunk.radix), u32::from(chunk.digit));
        }
        Ok(unpack_message(&mut payload))
    }

    /// Decodes one completed grid, appending its 81 chunks to `chunks`.
    ///
    /// Candidate lists are recomputed exactly as during encoding — the
    /// same digits have been placed in the same order up to each cell, so
    /// the same lists reappear — and the position of the grid's actual
    /// digit within the list recovers the mixed-radix digit.
    ///
    /// # Errors
    ///
    /// See [`decode`](Self::decode).
    pub fn decode_block(&mut self, grid: &Grid, chunks: &mut Vec<Chunk>) -> Result<(), CodecError> {
        let mut constraints = Constraints::new();
        for cell in Cell::all() {
            let Some(symbol) = grid.get(cell) else {
                return Err(CodecError::IncompleteGrid);
            };
            let candidates = constraints.candidate_list(cell);
            let Some(digit) = candidates.iter().position(|digit| *digit == symbol) else {
                return Err(CodecError::SymbolNotViable { cell });
            };
            #[expect(clippy::cast_possible_truncation)]
            let (radix, digit) = (candidates.len() as u8, digit as u8);
            chunks.push(Chunk { radix, digit });
            constraints.place(cell, symbol);
        }
        Ok(())
    }
}

/// Packs a 7-bit-ASCII message into a payload integer, MSB-first.
///
/// # Errors
///
/// Returns [`CodecError::NonAsciiCharacter`] for any character with a
/// code point above 127.
pub fn pack_message(message: &str) -> Result<Payload, CodecError> {
    let mut payload = Payload::new();
    for ch in message.chars() {
        let code = u32::from(ch);
        if code > 0x7f {
            return Err(CodecError::NonAsciiCharacter { ch });
        }
        payload.push_low_bits(code, 7);
    }
    Ok(payload)
}

/// Unpacks a payload into its message, consuming it.
fn unpack_message(payload: &mut Payload) -> String {
    let mut codes = Vec::new();
    while !payload.is_zero() {
        codes.push(payload.pop_low_bits(7));
    }
    codes
        .iter()
        .rev()
        .map(|code| {
            #[expect(clippy::cast_possible_truncation)]
            let code = *code as u8;
            char::from(code)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_message_msb_first() {
        // "AB" packs to (65 << 7) | 66.
        let payload = pack_message("AB").unwrap();
        assert_eq!(payload, Payload::from((65 << 7) | 66));
    }

    #[test]
    fn test_pack_rejects_non_ascii() {
        assert_eq!(
            pack_message("héllo"),
            Err(CodecError::NonAsciiCharacter { ch: 'é' })
        );
    }

    #[test]
    fn test_unpack_message() {
        let mut payload = Payload::from((65 << 7) | 66);
        assert_eq!(unpack_message(&mut payload), "AB");
        assert!(payload.is_zero());
    }

    #[test]
    fn test_encode_empty_message_yields_no_blocks() {
        let mut coder = Coder::new();
        assert_eq!(coder.encode("").unwrap(), Vec::new());
        assert_eq!(coder.stats().blocks, 0);
    }

    #[test]
    fn test_encode_nul_yields_no_blocks() {
        // A single NUL packs to payload zero: zero blocks, by design.
        let mut coder = Coder::new();
        assert_eq!(coder.encode("\0").unwrap(), Vec::new());
    }

    #[test]
    fn test_encode_single_character_scenario() {
        // "A" (code 65) packs to payload 65 and consumes exactly one
        // block, since 65 != 0.
        let mut coder = Coder::new();
        let grids = coder.encode("A").unwrap();
        assert_eq!(grids.len(), 1);
        assert!(grids[0].is_valid_solution());

        assert_eq!(coder.decode(&grids).unwrap(), "A");
    }

    #[test]
    fn test_encoded_grids_are_valid_solutions() {
        let mut coder = Coder::new();
        let grids = coder.encode("HELLO SECRET WORLD").unwrap();
        assert!(!grids.is_empty());
        for grid in &grids {
            assert!(grid.is_valid_solution());
        }
    }

    #[test]
    fn test_round_trip_multi_block() {
        let message = "HELLO SECRET WORLD";
        let mut coder = Coder::new();
        let grids = coder.encode(message).unwrap();
        assert!(grids.len() > 1, "expected the message to span blocks");
        assert_eq!(coder.decode(&grids).unwrap(), message);
    }

    #[test]
    fn test_interior_nul_round_trips() {
        // Only *leading* zero payload content is unrepresentable.
        let message = "A\0B";
        let mut coder = Coder::new();
        let grids = coder.encode(message).unwrap();
        assert_eq!(coder.decode(&grids).unwrap(), message);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let encode = || {
            let mut coder = Coder::new();
            coder.encode("determinism").unwrap()
        };
        assert_eq!(encode(), encode());
    }

    #[test]
    fn test_entropy_bound_per_block() {
        // The entropy available in a block must cover the payload bits
        // it consumed: sum(log2(m)) >= bits consumed.
        let mut payload = pack_message("ENTROPY").unwrap();
        let mut coder = Coder::new();
        let (_, chunks) = coder.encode_block(&mut payload).unwrap();

        let total_entropy: f64 = chunks.iter().map(|c| f64::from(c.radix).log2()).sum();
        assert!(payload.is_zero(), "7 chars fit in one block");
        assert!(total_entropy >= 7.0 * 7.0);
    }

    #[test]
    fn test_entropy_stats_split() {
        let mut coder = Coder::new();
        let _ = coder.encode("A").unwrap();
        let stats = coder.stats();
        assert!(stats.entropy_used > 0.0);
        assert!(stats.entropy_unused > 0.0);
        // The block's total entropy must cover the 7 payload bits.
        assert!(stats.entropy_used + stats.entropy_unused >= 7.0);
    }

    #[test]
    fn test_decode_rejects_incomplete_grid() {
        let mut coder = Coder::new();
        let mut grids = coder.encode("A").unwrap();
        grids[0].set(Cell::new(40), None);
        assert_eq!(coder.decode(&grids), Err(CodecError::IncompleteGrid));
    }

    #[test]
    fn test_puzzle_mode_blanks_cells_and_counts() {
        let mut coder = Coder::new().with_puzzle_mode(true);
        let grids = coder.encode("A").unwrap();
        assert_eq!(grids.len(), 1);
        let stats = coder.stats();
        assert_eq!(
            grids[0].blank_count(),
            stats.removed_rule1 + stats.removed_rule2
        );
        assert!(grids[0].blank_count() > 0);
        assert_eq!(stats.clues_remaining(), 81 - grids[0].blank_count());
    }

    #[test]
    fn test_puzzle_mode_is_deterministic() {
        let encode = || {
            let mut coder = Coder::new().with_puzzle_mode(true);
            let grids = coder.encode("A").unwrap();
            (grids, coder.stats().clone())
        };
        let (grids_a, stats_a) = encode();
        let (grids_b, stats_b) = encode();
        assert_eq!(grids_a, grids_b);
        assert_eq!(stats_a.removed_rule1, stats_b.removed_rule1);
        assert_eq!(stats_a.removed_rule2, stats_b.removed_rule2);
    }
}
