//! Search configuration.
//!
//! [`SearchConfig`] holds every knob the engine reads. All parameters are
//! fixed at construction time; there is no runtime reconfiguration.
//! Validation is fail-fast: [`SearchEngine`](crate::engine::SearchEngine)
//! refuses to start with an invalid configuration instead of limping along
//! with a corrupted population-size invariant.

use crate::selection::SelectionPolarity;
use thiserror::Error;

/// A structural precondition violation in the configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The square side must be at least 1.
    #[error("side must be at least 1")]
    SideTooSmall,

    /// At least two individuals are needed for tournament pairing.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// Elites must leave room for offspring, otherwise the refill loop
    /// would have nothing to do (or, worse, overfill the next generation).
    #[error("elite_size ({elite_size}) must be smaller than population_size ({population_size})")]
    EliteSizeTooLarge {
        elite_size: usize,
        population_size: usize,
    },

    /// Mutation probability is a probability.
    #[error("mutation_probability must be within 0.0..=1.0, got {0}")]
    MutationProbabilityOutOfRange(f64),

    /// Crossover cut bounds are expressed in row units within the square.
    #[error(
        "crossover points must satisfy min <= max <= side - 1 \
         (min {min}, max {max}, side {side})"
    )]
    CrossoverBoundsInvalid {
        min: usize,
        max: usize,
        side: usize,
    },
}

/// Parameters of one magic-square search.
///
/// # Builder pattern
///
/// ```
/// use magic_square_ga::SearchConfig;
///
/// let config = SearchConfig::new(3)
///     .with_population_size(200)
///     .with_elite_size(20)
///     .with_mutation_probability(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Side length N of the square (the genome holds N² cells).
    pub side: usize,

    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of top-ranked individuals carried unchanged into the next
    /// generation.
    pub elite_size: usize,

    /// Number of consecutive stagnant generations (no newly discovered
    /// solution) after which the current elite is discarded. 0 disables
    /// elite death.
    pub elite_death_period: usize,

    /// Probability that a freshly bred child undergoes a swap mutation.
    pub mutation_probability: f64,

    /// Whether structurally identical children may coexist in one
    /// generation. When `false`, a duplicate child is discarded, not
    /// retried.
    pub allow_duplicates: bool,

    /// Lowest allowed crossover cut row (inclusive).
    pub min_crossover_point: usize,

    /// Highest allowed crossover cut row (inclusive).
    pub max_crossover_point: usize,

    /// Tournament polarity for mating-pool construction.
    pub polarity: SelectionPolarity,

    /// Whether to spread generation, evaluation, breeding, and sorting
    /// across the rayon worker pool.
    pub parallel: bool,

    /// Master random seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Optional generation cap. `None` searches until convergence, which
    /// is the historical behavior and not guaranteed to terminate.
    pub max_generations: Option<usize>,
}

impl SearchConfig {
    /// Creates a configuration for `side`×`side` squares with moderate
    /// defaults and crossover bounds spanning the whole square.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            population_size: 1000,
            elite_size: 100,
            elite_death_period: 100,
            mutation_probability: 0.03,
            allow_duplicates: false,
            min_crossover_point: 0,
            max_crossover_point: side.saturating_sub(1),
            polarity: SelectionPolarity::default(),
            parallel: true,
            seed: None,
            max_generations: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of elitism carry-overs.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the elite death period (0 disables elite death).
    pub fn with_elite_death_period(mut self, period: usize) -> Self {
        self.elite_death_period = period;
        self
    }

    /// Sets the per-child mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Allows or forbids structurally identical children per generation.
    pub fn with_allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    /// Sets the crossover cut bounds, in row units.
    pub fn with_crossover_points(mut self, min: usize, max: usize) -> Self {
        self.min_crossover_point = min;
        self.max_crossover_point = max;
        self
    }

    /// Sets the tournament polarity.
    pub fn with_polarity(mut self, polarity: SelectionPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Enables or disables parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the master seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, max: usize) -> Self {
        self.max_generations = Some(max);
        self
    }

    /// Validates all structural preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side == 0 {
            return Err(ConfigError::SideTooSmall);
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.elite_size >= self.population_size {
            return Err(ConfigError::EliteSizeTooLarge {
                elite_size: self.elite_size,
                population_size: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::MutationProbabilityOutOfRange(
                self.mutation_probability,
            ));
        }
        if self.min_crossover_point > self.max_crossover_point
            || self.max_crossover_point >= self.side
        {
            return Err(ConfigError::CrossoverBoundsInvalid {
                min: self.min_crossover_point,
                max: self.max_crossover_point,
                side: self.side,
            });
        }
        Ok(())
    }
}
