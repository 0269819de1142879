//! Seedable RNG for deck shuffles.
//!
//! A deal is fully determined by its seed, so the CLI can print the seed and
//! a user can replay the exact same opening hand later.
//!
//! ```
//! use tcg_deckbuilder::core::DeckRng;
//!
//! let mut rng = DeckRng::new(42);
//! let mut cards = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut cards);
//!
//! let mut again = DeckRng::new(42);
//! let mut same = vec![1, 2, 3, 4, 5];
//! again.shuffle(&mut same);
//! assert_eq!(cards, same);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream plus the seed it came from.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Pick a fresh seed from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
