//! Configuration for casting a reading.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cast::CastMethod;

/// Configuration for a random reading.
#[derive(Debug, Clone, Default)]
pub struct ReadingConfig {
    /// How lines are cast.
    pub method: CastMethod,
    /// RNG seed for a reproducible reading; seeded from the clock when unset.
    pub seed: Option<u64>,
}

impl ReadingConfig {
    /// Set the casting method.
    pub fn with_method(mut self, method: CastMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random source for this reading.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.unwrap_or_else(clock_seed))
    }
}

/// Nanoseconds since the UNIX epoch, truncated to 64 bits.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
