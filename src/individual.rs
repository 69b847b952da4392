//! Individuals: a genome plus per-generation bookkeeping.

use crate::genome::Genome;
use std::hash::{Hash, Hasher};

/// How an individual came to be: its parent genomes (by value), the
/// crossover description, and the mutation swap if one occurred.
///
/// Initial-population individuals carry no lineage.
#[derive(Debug, Clone)]
pub struct Lineage {
    /// The two parent genomes, captured by value at breeding time.
    pub parents: (Genome, Genome),

    /// Description of the crossover operation that produced this child.
    pub crossover: String,

    /// The pair of flat positions swapped by mutation, if any.
    pub swapped: Option<(usize, usize)>,
}

/// Fitness sentinel for individuals that have not been evaluated yet.
const UNSCORED: u64 = u64::MAX;

/// A genome wrapped with its fitness, lineage metadata, and elite flag.
///
/// Equality and hashing are defined structurally on the genome alone:
/// two individuals are the same iff their grids match cell by cell.
/// Lineage, fitness, and the elite flag never enter into identity, so the
/// engine's deduplication sets behave as sets of grids.
#[derive(Debug, Clone)]
pub struct Individual {
    genome: Genome,
    fitness: u64,
    lineage: Option<Lineage>,
    elite: bool,
}

impl Individual {
    /// Wraps a freshly generated genome with no lineage.
    pub fn founder(genome: Genome) -> Self {
        Self {
            genome,
            fitness: UNSCORED,
            lineage: None,
            elite: false,
        }
    }

    /// Wraps a bred child together with its lineage.
    pub fn child(genome: Genome, lineage: Lineage) -> Self {
        Self {
            genome,
            fitness: UNSCORED,
            lineage: Some(lineage),
            elite: false,
        }
    }

    /// The underlying genome.
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Current fitness; 0 means the genome is a magic square.
    ///
    /// # Panics
    /// Panics in debug builds if the individual has not been scored yet.
    pub fn fitness(&self) -> u64 {
        debug_assert!(self.is_scored(), "fitness read before evaluation");
        self.fitness
    }

    /// Whether this individual has been evaluated.
    pub fn is_scored(&self) -> bool {
        self.fitness != UNSCORED
    }

    /// Records the evaluator's score.
    pub fn set_fitness(&mut self, fitness: u64) {
        self.fitness = fitness;
    }

    /// Lineage metadata; `None` for initial-population individuals.
    pub fn lineage(&self) -> Option<&Lineage> {
        self.lineage.as_ref()
    }

    /// Whether this individual was carried over by elitism. Informational.
    pub fn is_elite(&self) -> bool {
        self.elite
    }

    /// Marks the individual as an elitism carry-over.
    pub(crate) fn mark_elite(&mut self) {
        self.elite = true;
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Self) -> bool {
        self.genome == other.genome
    }
}

impl Eq for Individual {}

impl Hash for Individual {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.genome.hash(state);
    }
}
