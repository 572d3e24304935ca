//! Injectable randomness for template generation.
//!
//! The engine never calls a global RNG directly; it asks a `RandomSource`
//! for a uniform value in `[0, 1)`. Tests pin outputs with `FixedRandom` or
//! `SequenceRandom`.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::RngExt;

pub trait RandomSource: Send + Sync {
    /// A uniform value in `[0, 1)`.
    fn uniform(&self) -> f64;
}

/// Picks one item uniformly. `None` only for an empty slice.
pub fn pick<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = (rng.uniform() * items.len() as f64).floor() as usize;
    items.get(idx.min(items.len() - 1))
}

/// Uniform integer in `low..=high`.
pub fn int_in_range(rng: &dyn RandomSource, low: u32, high: u32) -> u32 {
    let span = (high - low + 1) as f64;
    low + ((rng.uniform() * span).floor() as u32).min(high - low)
}

/// Thread-local `rand` generator. The default source.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn uniform(&self) -> f64 {
        self.0
    }
}

/// Cycles through a scripted list of values.
pub struct SequenceRandom {
    values: Vec<f64>,
    index: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            index: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn uniform(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.values[i % self.values.len()]
    }
}
