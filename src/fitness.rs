//! Magic-square fitness scoring.
//!
//! Fitness is the sum over all 2N+2 lines (rows, columns, both main
//! diagonals) of the squared deviation of the line sum from the magic
//! constant M = N(N²+1)/2. Zero fitness means every line sums to M.
//!
//! Squared deviation (rather than absolute) penalizes one badly-off line
//! more than several slightly-off ones, which gives selection a smoother
//! gradient to climb.

use crate::genome::Genome;

/// The magic constant M = N(N²+1)/2 that every line of a solved N×N
/// square sums to.
pub fn magic_constant(side: usize) -> u64 {
    let n = side as u64;
    n * (n * n + 1) / 2
}

/// Scores genomes against the magic-square line constraints.
///
/// The 2N+2 line index sets are precomputed once per side length, so
/// [`evaluate`](FitnessEvaluator::evaluate) is a flat pass over them.
/// Evaluation is a pure function of the genome: the same cells always
/// produce the same fitness, which keeps structural deduplication
/// meaningful.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    side: usize,
    magic_constant: i64,
    lines: Vec<Vec<usize>>,
}

impl FitnessEvaluator {
    /// Builds an evaluator for `side`×`side` squares.
    pub fn new(side: usize) -> Self {
        let mut lines = Vec::with_capacity(2 * side + 2);

        for r in 0..side {
            lines.push((0..side).map(|c| r * side + c).collect());
        }
        for c in 0..side {
            lines.push((0..side).map(|r| r * side + c).collect());
        }
        lines.push((0..side).map(|i| i * side + i).collect());
        lines.push((0..side).map(|i| i * side + (side - 1 - i)).collect());

        Self {
            side,
            magic_constant: magic_constant(side) as i64,
            lines,
        }
    }

    /// Side length this evaluator was built for.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Sum of squared line-sum deviations; 0 iff the genome is magic.
    ///
    /// # Panics
    /// Panics if the genome's side does not match the evaluator's.
    pub fn evaluate(&self, genome: &Genome) -> u64 {
        assert_eq!(
            genome.side(),
            self.side,
            "genome side does not match evaluator side"
        );

        let cells = genome.cells();
        self.lines
            .iter()
            .map(|line| {
                let sum: i64 = line.iter().map(|&i| cells[i] as i64).sum();
                let deviation = sum - self.magic_constant;
                (deviation * deviation) as u64
            })
            .sum()
    }
}
