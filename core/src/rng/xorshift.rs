//! xorshift64* random number generator
//!
//! Deterministic seeded PRNG for service-duration sampling. Same seed,
//! same sequence: simulations replay exactly, which is what the tests
//! and any debugging session rely on.

use serde::{Deserialize, Serialize};

/// Deterministic RNG using the xorshift64* variant.
///
/// # Example
/// ```
/// use teller_simulator_core_rs::SeededRng;
///
/// let mut rng = SeededRng::new(12345);
/// let minutes = rng.range_inclusive(5, 8);
/// assert!((5..=8).contains(&minutes));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create an RNG from a seed. A zero seed is mapped to 1, since
    /// xorshift state must never be zero.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Next raw 64-bit value, advancing the state.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform draw from the inclusive range `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "min must not exceed max");
        let span = (max - min) as u64 + 1;
        min + (self.next_u64() % span) as u32
    }

    /// Current internal state, for snapshots.
    pub fn state(&self) -> u64 {
        self.state
    }
}
