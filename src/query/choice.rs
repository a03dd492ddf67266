//! Injectable random choice
//!
//! Text generation and random traversal pick among candidates through a
//! [`Chooser`], so callers decide whether choices come from an RNG or from
//! a fixed script.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Picks one index out of `len` candidates
pub trait Chooser {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

/// Uniform choice backed by a `rand` RNG
#[derive(Debug, Clone)]
pub struct RngChooser<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChooser<StdRng> {
    /// Seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence of choices
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> Chooser for RngChooser<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, reduced modulo the candidate count.
///
/// Once the script runs out, every further choice is index 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChooser {
    script: VecDeque<usize>,
    calls: usize,
}

impl ScriptedChooser {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            calls: 0,
        }
    }

    /// Always picks the first candidate
    pub fn first() -> Self {
        Self::default()
    }

    /// Number of choices made so far
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Chooser for ScriptedChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.calls += 1;
        let next = self.script.pop_front().unwrap_or(0);
        next % len.max(1)
    }
}

/// Pick one element of `items` through `chooser`
pub(crate) fn choose<'a, T>(items: &'a [T], chooser: &mut impl Chooser) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = chooser.choose_index(items.len()).min(items.len() - 1);
    items.get(index)
}
