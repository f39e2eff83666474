//! Random sources for mock data
//!
//! Every generator and scorer takes a `RandomSource` instead of reaching for
//! a global RNG, so callers decide how numbers are produced: OS entropy in
//! production, a fixed seed for reproducible demos, a scripted sequence in
//! tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimal random interface used by the synthesizer and scorer
pub trait RandomSource {
    /// Uniform draw on `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform integer draw on `low..=high`
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}

/// How request-scoped RNGs are seeded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entropy {
    /// Fresh OS entropy for every RNG
    #[default]
    Os,
    /// Every RNG starts from the same seed, so identical calls give identical output
    Seeded(u64),
}

impl Entropy {
    /// `Seeded` when a seed is given, `Os` otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Entropy::Os, Entropy::Seeded)
    }

    /// Build a new RNG for one unit of work (typically one request)
    pub fn rng(&self) -> StdRng {
        match self {
            Entropy::Os => StdRng::from_entropy(),
            Entropy::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}

/// Replays fixed values in order, cycling when exhausted
///
/// Integer draws are clamped into the requested range. An empty script
/// yields `0.0` and `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    units: Vec<f64>,
    ints: Vec<u32>,
    unit_pos: usize,
    int_pos: usize,
}

impl ScriptedSource {
    pub fn new(units: Vec<f64>, ints: Vec<u32>) -> Self {
        Self {
            units,
            ints,
            unit_pos: 0,
            int_pos: 0,
        }
    }

    /// Source whose unit draws are always `value`
    pub fn constant_unit(value: f64) -> Self {
        Self::new(vec![value], Vec::new())
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let value = self.units[self.unit_pos % self.units.len()];
        self.unit_pos += 1;
        value
    }

    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if self.ints.is_empty() {
            return low;
        }
        let value = self.ints[self.int_pos % self.ints.len()];
        self.int_pos += 1;
        value.clamp(low, high)
    }
}
