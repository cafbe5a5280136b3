//! Entropy-backed RNG oracle for unseeded play.
use game_core::RngOracle;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// [`RngOracle`] over `rand`'s small fast generator.
#[derive(Clone, Debug)]
pub struct EntropyRng {
    inner: SmallRng,
}

impl EntropyRng {
    pub fn from_entropy() -> Self {
        Self {
            inner: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RngOracle for EntropyRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.inner.gen_range(min..max)
    }
}
