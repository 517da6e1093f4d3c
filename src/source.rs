//! Injectable integer sampling.
//!
//! Commands that invent values (random BST inserts, array appends, array
//! resets) draw them through [`ValueSource`] so tests can substitute a fixed
//! sequence for the random generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Inclusive integer range values are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 1, max: 99 }
    }
}

/// Source of integers in a bounded range
#[cfg_attr(test, mockall::automock)]
pub trait ValueSource {
    /// Draw one value in `[min, max]` (inclusive on both ends)
    fn sample(&mut self, min: i32, max: i32) -> i32;
}

/// Sample from a [`ValueRange`]
pub fn sample_in(source: &mut dyn ValueSource, range: ValueRange) -> i32 {
    source.sample(range.min, range.max)
}

/// Uniform sampling backed by `rand`
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ValueSource for RandomSource {
    fn sample(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// Values outside the requested range are clamped into it.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<i32>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl ValueSource for SequenceSource {
    fn sample(&mut self, min: i32, max: i32) -> i32 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(min, max.max(min))
    }
}
