//! RNG module - deterministic random source for spawns
//!
//! [`Board::spawn`](crate::Board::spawn) takes any [`rand::Rng`], so callers can pass
//! `rand::thread_rng()`, a seeded `StdRng`, or the small LCG below. `SimpleRng` is
//! what game sessions use: it is trivially reproducible from a `u32` seed and its
//! state can be stored alongside a board snapshot.

use rand::RngCore;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Restore a generator from a value returned by [`SimpleRng::state`].
    ///
    /// Unlike [`SimpleRng::new`] this takes the state verbatim, including 0, which
    /// the full-period LCG can reach mid-sequence.
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current internal state; `SimpleRng::from_state(rng.state())` continues the same sequence.
    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.step() as u64;
        let lo = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
