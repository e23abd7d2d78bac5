//! Encoding statistics.

/// Counters accumulated while encoding.
///
/// Entropy is measured in bits: each cell contributes `log2(m)` where `m`
/// is its radix, attributed to `entropy_used` while the payload is still
/// nonzero and to `entropy_unused` once it has drained to zero within a
/// block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    /// Characters encoded.
    pub chars: usize,
    /// Payload bits encoded (7 per character).
    pub bits: usize,
    /// Blocks produced.
    pub blocks: usize,
    /// Entropy consumed carrying payload bits.
    pub entropy_used: f64,
    /// Entropy spent after the payload drained.
    pub entropy_unused: f64,
    /// Clues removed by minimizer rule 1 (forced cell).
    pub removed_rule1: usize,
    /// Clues removed by minimizer rule 2 (positional uniqueness).
    pub removed_rule2: usize,
}

impl Stats {
    /// Number of clues remaining across all blocks after minimization.
    #[must_use]
    pub const fn clues_remaining(&self) -> usize {
        self.blocks * 81 - self.removed_rule1 - self.removed_rule2
    }
}
