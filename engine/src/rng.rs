//! Uniform symbol source for reel draws.
//!
//! ChaCha8 keeps draws cheap and reproducible under a fixed seed. There is no
//! cryptographic requirement; this is a play-money simulator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use reelhouse_types::{ReelOutcome, Symbol, REEL_POSITIONS};

pub struct ReelRng(ChaCha8Rng);

impl ReelRng {
    /// RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// Deterministic RNG for reproducible runs and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Draw one symbol uniformly from the wheel.
    pub fn draw_symbol(&mut self) -> Symbol {
        Symbol::ALL[self.0.gen_range(0..Symbol::ALL.len())]
    }

    /// Draw a full outcome: independent uniform draws per position, with
    /// replacement across the symbol set.
    pub fn draw_outcome(&mut self) -> ReelOutcome {
        let mut symbols = [Symbol::Cherry; REEL_POSITIONS];
        for slot in symbols.iter_mut() {
            *slot = self.draw_symbol();
        }
        ReelOutcome::new(symbols)
    }
}
