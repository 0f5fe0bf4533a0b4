//! Deterministic random streams.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Error, Result};

/// A stateful stream of values in `[0, 1)`.
///
/// Callers own their sources; the palette and the strip circle each get an
/// independent one so that reseeding one never perturbs the other.
pub trait RandomSource {
    /// Produce the next value of the stream.
    fn next(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}

/// Draw a value from `source`, failing fast when it breaks the `[0, 1)` contract.
pub fn draw<R: RandomSource + ?Sized>(source: &mut R) -> Result<f64> {
    let value = source.next();
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::RandomSourceViolation(value))
    }
}

/// Seeded source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source that always replays the same stream for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Source replaying a fixed list of values, cycling when exhausted.
///
/// An empty list yields `0.0` forever.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
