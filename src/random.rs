//! Random number generator construction.
//!
//! Every stochastic operation in the crate takes a generic `R: Rng`, so
//! callers may inject any generator. The runner builds a seeded [`StdRng`]
//! through [`create_rng`] to keep runs reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
