//! Random number source shared by the engine and its collaborators.
//!
//! Every run draws from a single [`SaRng`] stream, so a fixed seed makes a
//! run fully reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The random number generator threaded through every annealing run.
pub type SaRng = StdRng;

/// Creates a generator seeded with `seed`.
pub fn create_rng(seed: u64) -> SaRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, falling back to a random one.
pub fn rng_from_seed(seed: Option<u64>) -> SaRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
