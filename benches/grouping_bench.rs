//! Criterion benchmarks for the grouping GA.
//!
//! Uses synthetic persons so the numbers reflect algorithm overhead only.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_grouping::ga::{
    Chromosome, Crossover, GroupingConfig, GroupingRunner, IdAllocator, Population, Selection,
};
use u_grouping::models::{Person, PersonSource, SyntheticPeople};
use u_grouping::random::create_rng;

// ===========================================================================
// Full runs
// ===========================================================================

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping_run");
    group.sample_size(10);

    for (persons, pop, gen) in [(20usize, 20usize, 50usize), (60, 30, 30), (120, 40, 20)] {
        let source = SyntheticPeople::default()
            .with_person_count(persons)
            .with_interest_count(20);
        let config = GroupingConfig::default()
            .with_population_size(pop)
            .with_generation_count(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", persons, pop, gen), persons),
            &(source, config),
            |b, (s, c)| {
                b.iter(|| {
                    let result = GroupingRunner::run(black_box(s), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

// ===========================================================================
// Single generation, per operator
// ===========================================================================

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping_generation");
    group.sample_size(20);

    let persons: Arc<[Person]> = SyntheticPeople::default()
        .with_person_count(80)
        .with_interest_count(20)
        .persons()
        .into();

    for crossover in Crossover::ALL {
        for selection in Selection::ALL {
            let config = GroupingConfig::default()
                .with_population_size(30)
                .with_crossover(crossover)
                .with_selection(selection);
            let mut ids = IdAllocator::new();
            let mut rng = create_rng(42);
            let population = Population::generate_initial_population(
                30,
                4,
                Arc::clone(&persons),
                &mut ids,
                &mut rng,
            )
            .expect("valid benchmark population");

            group.bench_function(format!("{crossover:?}_{selection:?}"), |b| {
                b.iter(|| {
                    let next = population.make_generation(black_box(&config), &mut ids, &mut rng);
                    black_box(next)
                })
            });
        }
    }
    group.finish();
}

// ===========================================================================
// Chromosome construction
// ===========================================================================

fn bench_random_chromosome(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_chromosome");

    for &n in &[20usize, 100, 400] {
        let persons: Arc<[Person]> = SyntheticPeople::default()
            .with_person_count(n)
            .persons()
            .into();
        let mut ids = IdAllocator::new();
        let mut rng = create_rng(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &persons, |b, p| {
            b.iter(|| {
                let ch = Chromosome::random(ids.next_id(), 4, Arc::clone(p), &mut rng);
                black_box(ch)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_run, bench_generation, bench_random_chromosome);
criterion_main!(benches);
