//! Finite bit stream derived deterministically from a seed string
//!
//! Consumption strategy: the derived digest is treated as a flat bit array
//! and draws pop bits from the tail (most recently appended first), so the
//! stream is finite and exhaustible. This is the authoritative strategy for
//! the reproducibility guarantee; exhaustion is an explicit cursor bounds
//! check, never silent truncation.

use crate::io::error::{GeneratorError, Result, invalid_parameter};
use crate::random::source::IndexSource;
use bitvec::order::Lsb0;
use bitvec::vec::BitVec;
use sha2::{Digest, Sha256};

/// Fixed salt prepended to every seed before digestion
const SEED_SALT: [u8; 16] = [
    231, 126, 79, 196, 212, 85, 119, 77, 234, 240, 46, 38, 23, 19, 169, 193,
];

/// Deterministic, exhaustible decision stream derived from a seed string
///
/// Derivation is a single SHA-256 digest over the fixed salt followed by
/// the UTF-8 bytes of the seed, expanded least-significant-bit first into a
/// 256-bit buffer. Identical seeds always derive identical streams.
#[derive(Clone, Debug)]
pub struct SeededStream {
    bits: BitVec<u8, Lsb0>,
    cursor: usize,
    decisions: usize,
}

impl SeededStream {
    /// Derive a stream from a seed string
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Seeding`] for an empty seed; callers
    /// wanting non-deterministic output must use
    /// [`crate::random::SystemSource`] instead of a degenerate seed.
    pub fn derive(seed: &str) -> Result<Self> {
        if seed.is_empty() {
            return Err(GeneratorError::Seeding {
                reason: "seed string is empty; omit the seed for random output".to_string(),
            });
        }

        let digest = Sha256::new()
            .chain_update(SEED_SALT)
            .chain_update(seed.as_bytes())
            .finalize();
        let bits = BitVec::<u8, Lsb0>::from_slice(digest.as_slice());
        let cursor = bits.len();

        Ok(Self {
            bits,
            cursor,
            decisions: 0,
        })
    }

    /// Pop `count` bits from the tail of the stream into an integer
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EntropyExhausted`] if fewer than `count`
    /// bits remain; the stream is left untouched in that case.
    pub fn get_bits(&mut self, count: usize) -> Result<u32> {
        if count > self.cursor {
            return Err(GeneratorError::EntropyExhausted {
                requested: count,
                available: self.cursor,
            });
        }

        let mut value = 0u32;
        for _ in 0..count {
            self.cursor -= 1;
            let bit = self.bits.get(self.cursor).is_some_and(|bit| *bit);
            value = (value << 1) | u32::from(bit);
        }
        Ok(value)
    }

    /// Bits left before the stream is exhausted
    pub const fn remaining_bits(&self) -> usize {
        self.cursor
    }

    /// Decisions drawn so far, for entropy accounting
    pub const fn decisions(&self) -> usize {
        self.decisions
    }

    /// Bits a draw over `bound` alternatives consumes
    const fn bits_for(bound: usize) -> usize {
        if bound <= 1 {
            0
        } else {
            (usize::BITS - (bound - 1).leading_zeros()) as usize
        }
    }
}

impl IndexSource for SeededStream {
    /// Draw a uniform index by popping `ceil(log2(bound))` bits
    ///
    /// Bias-free for power-of-two bounds; other bounds reduce the assembled
    /// value modulo `bound`. A bound of one consumes no bits but still
    /// counts as a decision.
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(invalid_parameter(
                "bound",
                &bound,
                &"an index draw needs at least one alternative",
            ));
        }
        let value = self.get_bits(Self::bits_for(bound))?;
        self.decisions += 1;
        Ok(value as usize % bound)
    }
}
