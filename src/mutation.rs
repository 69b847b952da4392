//! Swap mutation.
//!
//! Mutation exchanges the values at two distinct random positions. A swap
//! keeps the value set intact, so the permutation invariant survives with
//! no repair step — replacing a value outright would break it.

use crate::genome::Genome;
use rand::Rng;

/// Swaps two distinct random positions in `genome`, returning the pair.
///
/// Genomes with fewer than two cells are left untouched.
pub fn swap_mutation<R: Rng>(genome: &mut Genome, rng: &mut R) -> Option<(usize, usize)> {
    let n = genome.len();
    if n < 2 {
        return None;
    }

    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }

    genome.swap(i, j);
    Some((i, j))
}

/// Applies [`swap_mutation`] with probability `probability`.
///
/// Returns the swapped pair when a mutation occurred, `None` otherwise.
/// The pair is lineage metadata only; correctness does not depend on it.
///
/// # Panics
/// Panics if `probability` is not within `0.0..=1.0` (enforced by
/// configuration validation upstream).
pub fn maybe_mutate<R: Rng>(
    genome: &mut Genome,
    probability: f64,
    rng: &mut R,
) -> Option<(usize, usize)> {
    if rng.random_bool(probability) {
        swap_mutation(genome, rng)
    } else {
        None
    }
}
