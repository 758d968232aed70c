//! Benchmark profiles for the Schelling engine.
//!
//! Shared world builders so every bench measures the same inputs.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use schelling_core::World;
use schelling_engine::{initialize, Distribution};

/// Side length of the reference profile: 40 000 cells, the upper end of
/// interactive use.
pub const REFERENCE_SIDE: usize = 200;

/// Seeded RNG for benches.
pub fn bench_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A `side × side` world with the default 25/25/50 mix.
pub fn reference_world(side: usize, seed: u64) -> World {
    initialize(side, &Distribution::default(), &mut bench_rng(seed))
        .expect("reference profile is a valid configuration")
}
