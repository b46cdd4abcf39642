//! Seeded and unseeded random streams
//!
//! The daily puzzle depends on every player drawing the same numbers from the
//! same seed, so the seeded generator is a fixed 32-bit mixer rather than a
//! library RNG whose output may change between versions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A stream of floats in `[0, 1)`
pub trait RandomSource {
    /// Draw the next value
    fn next_f64(&mut self) -> f64;

    /// Uniform index below `len`
    ///
    /// # Panics
    /// Panics if `len` is zero.
    fn next_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw an index from an empty range");
        // Values are < 1, so the product stays below `len`
        ((len as f64 * self.next_f64()).floor() as usize).min(len - 1)
    }
}

/// Mulberry32: a 32-bit state generator with wrapping arithmetic
///
/// Two streams built from the same seed yield bit-identical sequences. There is
/// no rewind; restart by constructing a new stream from the seed.
///
/// # Examples
/// ```
/// use todays_wordle::daily::{Mulberry32, RandomSource};
///
/// let mut a = Mulberry32::new(42);
/// let mut b = Mulberry32::new(42);
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const INCREMENT: u32 = 0x6D2B_79F5;
    const SCALE: f64 = 4_294_967_296.0;

    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl RandomSource for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::SCALE
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Non-reproducible uniform source for games that need no cross-player agreement
#[derive(Debug, Clone)]
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// The stream owned by one game
///
/// Allows runtime selection of the source while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum RandomStream {
    /// Reproducible stream for the daily puzzle
    Seeded(Mulberry32),
    /// Fresh entropy, used in challenge mode
    Entropy(EntropySource),
}

impl RandomStream {
    /// Derive a reproducible stream from `seed`
    #[must_use]
    pub fn derive(seed: u32) -> Self {
        tracing::debug!(seed, "deriving seeded stream");
        Self::Seeded(Mulberry32::new(seed))
    }

    /// Stream without reproducibility guarantees
    #[must_use]
    pub fn entropy() -> Self {
        Self::Entropy(EntropySource::new())
    }

    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        matches!(self, Self::Seeded(_))
    }
}

impl RandomSource for RandomStream {
    fn next_f64(&mut self) -> f64 {
        match self {
            Self::Seeded(s) => s.next_f64(),
            Self::Entropy(s) => s.next_f64(),
        }
    }
}
