//! Permutation genome for square grids.
//!
//! A [`Genome`] is an ordered sequence of N² distinct integers in `1..=N²`,
//! read as a row-major N×N grid. Every genetic operator in this crate is
//! required to preserve that permutation property; [`Genome::new`] is the
//! checked entry point for external data, while operators construct children
//! through the unchecked path and assert the invariant in debug builds.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Error returned when a cell sequence is not a valid square permutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenomeError {
    /// The number of cells does not equal `side * side`.
    #[error("expected {expected} cells for a {side}x{side} square, got {actual}")]
    WrongLength {
        side: usize,
        expected: usize,
        actual: usize,
    },

    /// A value is missing, repeated, or outside `1..=side²`.
    #[error("cells are not a permutation of 1..={0}")]
    NotAPermutation(usize),
}

/// A candidate square: a permutation of `1..=side²` in row-major order.
///
/// Genomes are value types. Equality and hashing are structural (cell by
/// cell), which is what the engine's deduplication relies on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Genome {
    side: usize,
    cells: Vec<u32>,
}

impl Genome {
    /// Builds a genome from raw cells, validating the permutation property.
    pub fn new(side: usize, cells: Vec<u32>) -> Result<Self, GenomeError> {
        let expected = side * side;
        if cells.len() != expected {
            return Err(GenomeError::WrongLength {
                side,
                expected,
                actual: cells.len(),
            });
        }
        if !is_permutation(&cells) {
            return Err(GenomeError::NotAPermutation(expected));
        }
        Ok(Self { side, cells })
    }

    /// Draws a uniformly random permutation of `1..=side²`.
    ///
    /// The caller supplies the RNG, so concurrent generation uses one
    /// isolated source per worker rather than a shared singleton.
    pub fn random<R: Rng>(side: usize, rng: &mut R) -> Self {
        let mut cells: Vec<u32> = (1..=(side * side) as u32).collect();
        cells.shuffle(rng);
        Self { side, cells }
    }

    /// Constructs a genome that is already known to be a valid permutation.
    ///
    /// Used by the genetic operators, which preserve validity by
    /// construction. A violation here is an internal logic error.
    pub(crate) fn from_cells_unchecked(side: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), side * side);
        debug_assert!(is_permutation(&cells), "operator produced {cells:?}");
        Self { side, cells }
    }

    /// Side length N of the square.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (N²).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True only for the degenerate zero-sided genome.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat row-major cell values.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// The cells of row `r`.
    ///
    /// # Panics
    /// Panics if `r >= side`.
    pub fn row(&self, r: usize) -> &[u32] {
        &self.cells[r * self.side..(r + 1) * self.side]
    }

    /// Swaps two flat positions in place.
    ///
    /// Swapping keeps the value set intact, so the permutation invariant
    /// survives without a repair pass.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.cells.swap(i, j);
    }
}

impl fmt::Display for Genome {
    /// Renders the grid as N lines of N space-separated integers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.side {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

/// Checks that `cells` contains every value in `1..=cells.len()` exactly once.
pub fn is_permutation(cells: &[u32]) -> bool {
    let n = cells.len();
    let mut seen = vec![false; n];
    for &value in cells {
        let v = value as usize;
        if v < 1 || v > n || seen[v - 1] {
            return false;
        }
        seen[v - 1] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for side in 1..=6 {
            for _ in 0..50 {
                let genome = Genome::random(side, &mut rng);
                let mut sorted = genome.cells().to_vec();
                sorted.sort_unstable();
                let expected: Vec<u32> = (1..=(side * side) as u32).collect();
                assert_eq!(sorted, expected, "side {side}");
            }
        }
    }

    #[test]
    fn test_new_accepts_valid_cells() {
        let genome = Genome::new(3, vec![2, 7, 6, 9, 5, 1, 4, 3, 8]).unwrap();
        assert_eq!(genome.side(), 3);
        assert_eq!(genome.len(), 9);
        assert_eq!(genome.row(1), &[9, 5, 1]);
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = Genome::new(3, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            GenomeError::WrongLength {
                side: 3,
                expected: 9,
                actual: 3
            }
        );
    }

    #[test]
    fn test_new_rejects_repeated_value() {
        let err = Genome::new(2, vec![1, 2, 2, 4]).unwrap_err();
        assert_eq!(err, GenomeError::NotAPermutation(4));
    }

    #[test]
    fn test_new_rejects_out_of_range_value() {
        assert!(Genome::new(2, vec![0, 1, 2, 3]).is_err());
        assert!(Genome::new(2, vec![1, 2, 3, 5]).is_err());
    }

    #[test]
    fn test_swap_preserves_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut genome = Genome::random(4, &mut rng);
        genome.swap(0, 15);
        genome.swap(3, 3);
        assert!(is_permutation(genome.cells()));
    }

    #[test]
    fn test_display_grid() {
        let genome = Genome::new(2, vec![3, 1, 4, 2]).unwrap();
        assert_eq!(genome.to_string(), "3 1\n4 2");
    }

    #[test]
    fn test_structural_equality() {
        let a = Genome::new(2, vec![1, 2, 3, 4]).unwrap();
        let b = Genome::new(2, vec![1, 2, 3, 4]).unwrap();
        let c = Genome::new(2, vec![4, 3, 2, 1]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    proptest! {
        #[test]
        fn prop_random_always_permutes(seed in any::<u64>(), side in 1usize..6) {
            let mut rng = StdRng::seed_from_u64(seed);
            let genome = Genome::random(side, &mut rng);
            prop_assert!(is_permutation(genome.cells()));
            prop_assert_eq!(genome.len(), side * side);
        }
    }
}
