//! The evolutionary search loop.
//!
//! [`SearchEngine`] owns the population and drives the generation state
//! machine: evaluate → sort → convergence check → elite death → selection →
//! elitism → refill → repeat. The search terminates exactly when a
//! fitness-0 individual is found (or an optional generation cap is hit);
//! there is no bounded-runtime guarantee.
//!
//! Generations are built into a fresh buffer and swapped in whole, so the
//! current population is never structurally mutated while it is being read.
//! With `parallel` enabled, genome generation, breeding, and evaluation are
//! spread across the rayon pool with one derived RNG per work item, and the
//! fitness sort uses rayon's parallel sort. Elite retention, elite death,
//! and duplicate filtering stay sequential; each phase is a barrier.

use crate::config::{ConfigError, SearchConfig};
use crate::crossover::{order_crossover, CrossoverOutcome};
use crate::fitness::FitnessEvaluator;
use crate::genome::Genome;
use crate::individual::{Individual, Lineage};
use crate::mutation::maybe_mutate;
use crate::selection::build_mating_pool;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashSet;

/// What a finished search produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Distinct magic squares discovered, in a stable cell-wise order.
    /// Empty only when a generation cap stopped the search first.
    pub solutions: Vec<Individual>,

    /// Number of generations bred (the initial population is generation 0).
    pub generations: usize,

    /// True when the search ended by finding at least one solution.
    pub converged: bool,

    /// Best fitness of each examined generation, starting with generation 0.
    pub best_fitness_history: Vec<u64>,
}

/// Evolutionary search for magic squares of a fixed side length.
///
/// # Usage
///
/// ```
/// use magic_square_ga::{SearchConfig, SearchEngine};
///
/// let config = SearchConfig::new(3)
///     .with_population_size(300)
///     .with_elite_size(30)
///     .with_allow_duplicates(true)
///     .with_seed(42)
///     .with_parallel(false)
///     .with_max_generations(2000);
/// let outcome = SearchEngine::new(config).unwrap().run();
/// assert!(outcome.converged);
/// ```
pub struct SearchEngine {
    config: SearchConfig,
    evaluator: FitnessEvaluator,
    rng: StdRng,
    master_seed: u64,
    population: Vec<Individual>,
    found: HashSet<Individual>,
    history: Vec<u64>,
    stagnation: usize,
    generation: usize,
}

impl SearchEngine {
    /// Validates the configuration and seeds the initial population.
    ///
    /// Fails fast on any structural precondition violation; the search
    /// never starts from an invalid configuration.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let master_seed = config.seed.unwrap_or_else(rand::random);
        let rng = StdRng::seed_from_u64(master_seed);
        let evaluator = FitnessEvaluator::new(config.side);
        let population = initial_population(&config, &evaluator, master_seed);

        Ok(Self {
            config,
            evaluator,
            rng,
            master_seed,
            population,
            found: HashSet::new(),
            history: Vec::new(),
            stagnation: 0,
            generation: 0,
        })
    }

    /// The seed actually in use (drawn from the OS when none was supplied).
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Number of generations bred so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Consecutive generations without a newly discovered solution.
    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    /// The current population. Sorted by fitness only transiently inside
    /// [`step`](Self::step); after a step the elites (if any) occupy the
    /// leading positions.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Runs the loop until convergence or the configured generation cap.
    pub fn run(&mut self) -> SearchOutcome {
        let converged = loop {
            if self.step() {
                break true;
            }
            if let Some(max) = self.config.max_generations {
                if self.generation >= max {
                    break false;
                }
            }
        };

        let mut solutions: Vec<Individual> = self.found.iter().cloned().collect();
        solutions.sort_by(|a, b| a.genome().cells().cmp(b.genome().cells()));

        SearchOutcome {
            solutions,
            generations: self.generation,
            converged,
            best_fitness_history: self.history.clone(),
        }
    }

    /// Advances the state machine by one generation.
    ///
    /// Sorts the population, harvests any fitness-0 individuals into the
    /// found-solutions set, and — unless a solution exists — breeds the
    /// next generation. Returns `true` once the found set is non-empty.
    pub fn step(&mut self) -> bool {
        if !self.found.is_empty() {
            return true;
        }

        sort_by_fitness(&mut self.population, self.config.parallel);
        let best = self.population[0].fitness();
        self.history.push(best);

        let mut discovered = false;
        for individual in self.population.iter().take_while(|i| i.fitness() == 0) {
            if self.found.insert(individual.clone()) {
                discovered = true;
            }
        }
        if discovered {
            self.stagnation = 0;
            info!(
                "generation {}: {} magic square(s) found",
                self.generation,
                self.found.len()
            );
        }
        if !self.found.is_empty() {
            return true;
        }

        debug!(
            "generation {}: best fitness {best}, stagnation {}",
            self.generation, self.stagnation
        );
        self.advance_generation();
        false
    }

    /// Builds the next generation: elite death, mating pool, elitism,
    /// crossover/mutation refill under the duplicate policy.
    ///
    /// Precondition: the population is sorted ascending by fitness.
    fn advance_generation(&mut self) {
        self.generation += 1;

        let purged = self.config.elite_death_period != 0
            && self.stagnation > self.config.elite_death_period;
        if purged {
            // Stagnated for too long: the elite is discarded outright and
            // elitism is forfeited for this generation.
            let cut = self.config.elite_size.min(self.population.len());
            self.population.drain(..cut);
            self.stagnation = 0;
            debug!(
                "generation {}: elite death, dropped top {cut}",
                self.generation
            );
        } else {
            self.stagnation += 1;
        }

        let pool = build_mating_pool(
            &self.population,
            self.config.population_size / 2,
            self.config.polarity,
            &mut self.rng,
        );

        let mut next: Vec<Individual> = Vec::with_capacity(self.config.population_size);
        if !purged {
            next.extend(self.population[..self.config.elite_size].iter().map(|e| {
                let mut elite = e.clone();
                elite.mark_elite();
                elite
            }));
        }

        let mut seen: HashSet<Genome> = HashSet::new();
        if !self.config.allow_duplicates {
            seen.extend(next.iter().map(|i| i.genome().clone()));
        }

        while next.len() < self.config.population_size {
            let deficit = self.config.population_size - next.len();
            let picks: Vec<(usize, usize, u64)> = (0..deficit / 2 + 1)
                .map(|_| {
                    let a = pool[self.rng.random_range(0..pool.len())];
                    let b = pool[self.rng.random_range(0..pool.len())];
                    (a, b, self.rng.random())
                })
                .collect();

            let config = &self.config;
            let evaluator = &self.evaluator;
            let population = &self.population;
            let broods: Vec<[Individual; 2]> = if config.parallel {
                picks
                    .par_iter()
                    .map(|&(a, b, seed)| {
                        breed(config, evaluator, &population[a], &population[b], seed)
                    })
                    .collect()
            } else {
                picks
                    .iter()
                    .map(|&(a, b, seed)| {
                        breed(config, evaluator, &population[a], &population[b], seed)
                    })
                    .collect()
            };

            for brood in broods {
                for child in brood {
                    if next.len() >= self.config.population_size {
                        break;
                    }
                    // A duplicate child is discarded, not retried.
                    if !self.config.allow_duplicates && !seen.insert(child.genome().clone()) {
                        continue;
                    }
                    next.push(child);
                }
            }
        }

        self.population = next;
    }
}

/// Generates and scores the initial population, one derived RNG per
/// individual so parallel generation stays reproducible and contention-free.
fn initial_population(
    config: &SearchConfig,
    evaluator: &FitnessEvaluator,
    master_seed: u64,
) -> Vec<Individual> {
    let make = |i: usize| {
        let mut rng = StdRng::seed_from_u64(derive_seed(master_seed, i as u64));
        let mut individual = Individual::founder(Genome::random(config.side, &mut rng));
        individual.set_fitness(evaluator.evaluate(individual.genome()));
        individual
    };

    if config.parallel {
        (0..config.population_size).into_par_iter().map(make).collect()
    } else {
        (0..config.population_size).map(make).collect()
    }
}

/// Crossover then mutation of one parent pair, producing two scored
/// children with full lineage. Runs on worker threads with its own RNG.
fn breed(
    config: &SearchConfig,
    evaluator: &FitnessEvaluator,
    parent1: &Individual,
    parent2: &Individual,
    seed: u64,
) -> [Individual; 2] {
    let mut rng = StdRng::seed_from_u64(seed);
    let CrossoverOutcome { children, details } = order_crossover(
        parent1.genome(),
        parent2.genome(),
        config.min_crossover_point,
        config.max_crossover_point,
        &mut rng,
    );

    children.map(|mut genome| {
        let swapped = maybe_mutate(&mut genome, config.mutation_probability, &mut rng);
        let mut child = Individual::child(
            genome,
            Lineage {
                parents: (parent1.genome().clone(), parent2.genome().clone()),
                crossover: details.clone(),
                swapped,
            },
        );
        child.set_fitness(evaluator.evaluate(child.genome()));
        child
    })
}

fn sort_by_fitness(population: &mut [Individual], parallel: bool) {
    if parallel {
        population.par_sort_by_key(Individual::fitness);
    } else {
        population.sort_by_key(Individual::fitness);
    }
}

/// Spreads worker seeds away from the master stream.
fn derive_seed(master_seed: u64, index: u64) -> u64 {
    master_seed.wrapping_add((index + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
