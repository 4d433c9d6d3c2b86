//! Seeded random number generation for deck sampling.
//!
//! - **Deterministic**: same seed produces the same deck sequence, which is
//!   what the statistical and scenario tests rely on
//! - **Uniform**: index sampling gives every n-subset equal probability; no
//!   weighting by elixir, rarity, or any other attribute
//!
//! Cryptographic strength is not required here, only uniformity; ChaCha8 is
//! fast and keeps the draws well distributed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used for every draw in deck assembly.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    ///
    /// The drawn seed is kept so a surprising deck can still be reproduced.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let idx = self.gen_range(0..slice.len());
        slice.get(idx)
    }

    /// Sample `n` distinct indices from `0..len`, each n-subset equally
    /// likely. Panics if `n > len`; callers clamp first.
    #[must_use]
    pub fn sample_indices(&mut self, len: usize, n: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, len, n).into_vec()
    }
}
