//! Seedable random number streams.
//!
//! The solver owns one master generator per run. Each ant receives its
//! own generator seeded from a draw of the master, so construction is
//! reproducible whether ants run in sequence or on a thread pool.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a generator from a fixed seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates the master generator for a run.
///
/// `None` draws a seed from the operating system.
pub fn master_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Draws one independent stream seed per ant, in ant order.
pub fn ant_seeds<R: Rng>(master: &mut R, num_ants: usize) -> Vec<u64> {
    (0..num_ants).map(|_| master.random::<u64>()).collect()
}
