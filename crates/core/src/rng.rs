//! RNG module - uniform random shape selection
//!
//! Every spawn draws one of the seven shapes with equal probability and no
//! memory of earlier draws. A small LCG keeps games reproducible per seed.

use crate::types::{ShapeId, SHAPE_COUNT};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

/// 32-bit linear congruential generator (Numerical Recipes constants)
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed 0 is treated as 1.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Uniform draw from `0..bound` (`bound` at most 2^16)
    pub fn next_range(&mut self, bound: u32) -> u32 {
        debug_assert!(bound <= 1 << 16);
        // Only the upper half of the state is used; the low bits cycle quickly.
        ((self.next_u32() >> 16) * bound) >> 16
    }
}

/// Where the game loop gets the shape of the next piece
pub trait ShapeSource {
    fn next_shape(&mut self) -> ShapeId;
}

/// Scripted sources: any closure producing shapes
impl<F> ShapeSource for F
where
    F: FnMut() -> ShapeId,
{
    fn next_shape(&mut self) -> ShapeId {
        self()
    }
}

/// Uniformly random shapes from a seeded [`SimpleRng`]
#[derive(Debug, Clone)]
pub struct RandomShapes {
    rng: SimpleRng,
}

impl RandomShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for RandomShapes {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for RandomShapes {
    fn next_shape(&mut self) -> ShapeId {
        let idx = self.rng.next_range(SHAPE_COUNT as u32) as usize;
        ShapeId::ALL[idx]
    }
}
