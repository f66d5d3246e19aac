//! RNG module - uniform random piece selection
//!
//! Every spawn draws one of the seven kinds with equal probability. There is
//! no bag or history: repeats are possible and expected.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::types::PieceKind;

/// Uniformly random piece kind source.
#[derive(Debug, Clone)]
pub struct UniformKinds {
    rng: StdRng,
    uniform: Uniform<usize>,
    seed: Option<u64>,
}

impl UniformKinds {
    /// Source seeded from operating-system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            uniform: Uniform::from(0..PieceKind::ALL.len()),
            seed: None,
        }
    }

    /// Deterministic source for replays and tests
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            uniform: Uniform::from(0..PieceKind::ALL.len()),
            seed: Some(seed),
        }
    }

    /// Draw the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.uniform.sample(&mut self.rng)]
    }

    /// Seed this source was created with, if it was seeded explicitly
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for UniformKinds {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Iterator for UniformKinds {
    type Item = PieceKind;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_kind())
    }
}
