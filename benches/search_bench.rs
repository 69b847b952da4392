//! Criterion benchmarks for the magic-square search.
//!
//! Measures the hot paths in isolation (fitness evaluation, crossover) and
//! short capped engine runs end to end.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use magic_square_ga::crossover::order_crossover;
use magic_square_ga::{FitnessEvaluator, Genome, SearchConfig, SearchEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");

    for side in [3usize, 5, 8, 12] {
        let evaluator = FitnessEvaluator::new(side);
        let mut rng = StdRng::seed_from_u64(42);
        let genome = Genome::random(side, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| black_box(evaluator.evaluate(black_box(&genome))));
        });
    }

    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossover");

    for side in [3usize, 5, 8] {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = Genome::random(side, &mut rng);
        let p2 = Genome::random(side, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                black_box(order_crossover(
                    black_box(&p1),
                    black_box(&p2),
                    0,
                    side - 1,
                    &mut rng,
                ))
            });
        });
    }

    group.finish();
}

fn bench_engine_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_25_generations");
    group.sample_size(10);

    for side in [3usize, 4] {
        let config = SearchConfig::new(side)
            .with_population_size(500)
            .with_elite_size(50)
            .with_allow_duplicates(true)
            .with_seed(42)
            .with_parallel(false)
            .with_max_generations(25);

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let mut engine = SearchEngine::new(config.clone()).expect("valid config");
                black_box(engine.run())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fitness,
    bench_crossover,
    bench_engine_generations
);
criterion_main!(benches);
