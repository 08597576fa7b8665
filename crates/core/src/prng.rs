//! Deterministic PRNG for reproducible particle placement.
//!
//! Xorshift64 with the standard (13, 7, 17) shift triple. Pure integer
//! arithmetic, so the same seed yields the same placement on every
//! platform — a saved [`Seed`](crate::seed::Seed) replays exactly.

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG. Same seed, same sequence.
///
/// A seed of 0 is the fixed point of the xorshift recurrence and is
/// replaced with a fixed non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Substitute for seed 0, which would make every draw return 0.
    const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1), using the top 53 bits for full mantissa
    /// precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}
