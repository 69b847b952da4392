//! Genetic search for magic squares.
//!
//! Searches, by simulated evolution, for an N×N arrangement of `1..=N²`
//! where every row, column, and both main diagonals sum to the magic
//! constant M = N(N²+1)/2. Candidate squares are permutation-encoded
//! genomes; every genetic operator preserves the permutation invariant by
//! construction, so no repair pass exists anywhere in the pipeline.
//!
//! # Key Types
//!
//! - [`Genome`]: a permutation of `1..=N²`, read as a row-major grid
//! - [`FitnessEvaluator`]: sum of squared line-sum deviations; 0 = solved
//! - [`Individual`]: genome plus fitness, lineage metadata, and elite flag
//! - [`SearchConfig`]: all search parameters, with fail-fast validation
//! - [`SearchEngine`]: the generation loop — selection, crossover,
//!   mutation, elitism with periodic elite turnover, convergence detection
//!
//! # Example
//!
//! ```
//! use magic_square_ga::{SearchConfig, SearchEngine};
//!
//! let config = SearchConfig::new(3)
//!     .with_population_size(300)
//!     .with_elite_size(30)
//!     .with_allow_duplicates(true)
//!     .with_seed(42)
//!     .with_parallel(false)
//!     .with_max_generations(2000);
//!
//! let outcome = SearchEngine::new(config).unwrap().run();
//! assert!(outcome.converged);
//! for solution in &outcome.solutions {
//!     println!("{}\n", solution.genome());
//! }
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//!   (order-based crossover family)

pub mod config;
pub mod crossover;
pub mod engine;
pub mod fitness;
pub mod format;
pub mod genome;
pub mod individual;
pub mod mutation;
pub mod selection;

pub use config::{ConfigError, SearchConfig};
pub use crossover::CrossoverOutcome;
pub use engine::{SearchEngine, SearchOutcome};
pub use fitness::{magic_constant, FitnessEvaluator};
pub use genome::{Genome, GenomeError};
pub use individual::{Individual, Lineage};
pub use selection::SelectionPolarity;
