use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// A uniform choice function over a fixed-size sequence.
///
/// The wheel owns exactly one selector and routes every draw through it, so
/// substituting a scripted implementation (see `mocks`) is all a test needs
/// to pin the winning pocket.
pub trait BinSelector {
    /// Returns an index in `0..bound`, each call an independent draw with
    /// replacement. Implementations must never return `bound` or above.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Production selector backed by a seedable ChaCha stream.
pub struct ChaChaSelector {
    rng: ChaCha20Rng,
}

impl ChaChaSelector {
    /// Deterministic stream: the same seed yields the same pick sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// OS-entropy stream for live play.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }
}

impl BinSelector for ChaChaSelector {
    fn pick(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}
