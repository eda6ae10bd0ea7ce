//! Random-number sources for the tick function.
//!
//! The simulation never touches a global RNG; every random draw goes through
//! a [`RandomSource`] handed to the tick, so tests can inject scripted values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed numbers.
pub trait RandomSource {
    /// Returns a value uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Returns a value uniformly distributed in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Creates a reproducible source from a seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays a fixed sequence of unit values, cycling when exhausted.
///
/// # Examples
///
/// ```
/// use energy_dash::sim::random::{RandomSource, ScriptedRandom};
///
/// let mut r = ScriptedRandom::new(vec![0.0, 0.5]);
/// assert_eq!(r.uniform(-1.0, 1.0), -1.0);
/// assert_eq!(r.uniform(-1.0, 1.0), 0.0);
/// assert_eq!(r.uniform(-1.0, 1.0), -1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedRandom {
    /// Creates a scripted source. An empty script behaves like `[0.5]`.
    ///
    /// Values are clamped into `[0, 1)`.
    pub fn new(values: Vec<f64>) -> Self {
        let values = if values.is_empty() {
            vec![0.5]
        } else {
            values
                .into_iter()
                .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
                .collect()
        };
        Self { values, pos: 0 }
    }

    /// A source that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
