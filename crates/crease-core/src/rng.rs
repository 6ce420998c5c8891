//! Injected randomness for ball resolution.
//!
//! The resolver never reaches for a global random function. Callers hand it a
//! [`RandomSource`]: a seeded [`ChaCha8Rng`] for reproducible matches, an OS
//! backed generator for casual play, or a [`ScriptedSource`] when the exact
//! sequence of draws must be controlled.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform random values in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns a uniform index in `0..len`.
    ///
    /// Scales one unit draw by `len` and floors it. Returns 0 when `len` is 0.
    fn next_index(&mut self, len: usize) -> usize {
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let scaled = (self.next_unit() * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }
}

impl RandomSource for ChaCha8Rng {
    fn next_unit(&mut self) -> f64 {
        self.gen()
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen()
    }
}

impl RandomSource for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.gen()
    }
}

/// Creates the deterministic generator used for seeded matches.
///
/// # Example
///
/// ```
/// use crease_core::rng::{seeded, RandomSource};
///
/// let mut a = seeded(7);
/// let mut b = seeded(7);
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[must_use]
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A random source that replays a fixed list of values.
///
/// Values are returned in order and the list wraps around once exhausted.
/// An empty script always yields `0.0`. Values are clamped into `[0, 1)`.
///
/// # Example
///
/// ```
/// use crease_core::rng::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![0.25, 0.75]);
/// assert_eq!(source.next_unit(), 0.25);
/// assert_eq!(source.next_unit(), 0.75);
/// assert_eq!(source.next_unit(), 0.25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source that replays `values`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, LARGEST_UNIT) } else { 0.0 })
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }

    /// Restarts the script from its first value.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

/// Largest `f64` strictly below 1.0.
const LARGEST_UNIT: f64 = 1.0 - f64::EPSILON / 2.0;

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
