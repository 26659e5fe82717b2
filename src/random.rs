//! Random sources for shape fill and explosion directions.
//!
//! Shape generation and the explode burst are the only consumers of
//! randomness. They take a `&mut dyn RandomSource` so tests can swap in a
//! scripted sequence and get reproducible targets.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random numbers in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Uniform value in `[-width / 2, width / 2)`.
    #[inline]
    fn centered(&mut self, width: f32) -> f32 {
        (self.next_f32() - 0.5) * width
    }

    /// Unit vector from a normalized uniform cube sample.
    ///
    /// A degenerate (all-center) sample falls back to +X so the result is
    /// always unit length.
    fn direction(&mut self) -> Vec3 {
        let v = Vec3::new(self.centered(1.0), self.centered(1.0), self.centered(1.0));
        v.try_normalize().unwrap_or(Vec3::X)
    }
}

/// Production random source backed by `SmallRng`.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: SmallRng,
}

impl StdRandom {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seed deterministically, e.g. for benchmarks and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    #[inline]
    fn next_f32(&mut self) -> f32 {
        self.rng.gen()
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// An empty list behaves like a constant `0.5`, which puts every centered
/// jitter at exactly zero.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f32>) -> Self {
        let values = values.into_iter().map(|v| v.clamp(0.0, 1.0)).collect();
        Self { values, cursor: 0 }
    }

    /// Always returns `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.5;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        v
    }
}
