//! Randomness capability for PLAY_RANDOM

/// Source of uniform indices
pub trait RandomSource {
    /// Pick an index in `0..len`. Never called with `len == 0`.
    /// The engine clamps anything past the end to the last index.
    fn pick(&mut self, len: usize) -> usize;
}

/// Default source backed by `fastrand`
#[derive(Debug)]
pub struct FastRandSource {
    rng: fastrand::Rng,
}

impl FastRandSource {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic sequence for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastRandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandSource {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.usize(..len)
    }
}

/// Always picks the same index (clamped to the range). Useful for tests
/// and scripted sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSource(pub usize);

impl RandomSource for FixedSource {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
