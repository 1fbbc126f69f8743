use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use epinet_sim::simulation::{Replicate, SeedPolicy, SeedingConfig, SimulationBuilder, TransitionConfig};
use epinet_sim::ContactGraph;

fn bench_network_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_build");

    for &nodes in &[1_000usize, 10_000] {
        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(
            BenchmarkId::new("power_law_cluster", nodes),
            &nodes,
            |b, &nodes| {
                b.iter(|| {
                    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
                    black_box(
                        ContactGraph::power_law_cluster(black_box(nodes), 4, 0.3, &mut rng)
                            .unwrap(),
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_replicate_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("replicate_step");
    let nodes = 10_000;

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let graph = ContactGraph::power_law_cluster(nodes, 4, 0.3, &mut rng).unwrap();
    let transition = TransitionConfig::new(0.05, 3, 7);
    let seeding = SeedingConfig::new(20, SeedPolicy::WithReplacement);

    group.throughput(Throughput::Elements(nodes as u64));
    group.bench_function("advance_one_day", |b| {
        b.iter_batched(
            || Replicate::new(&graph, transition, seeding, 42).unwrap(),
            |mut replicate| {
                replicate.step().unwrap();
                black_box(replicate.counts())
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_ensemble_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ensemble_run");
    let simulations = 8;
    let days = 30;

    group.throughput(Throughput::Elements((simulations * days) as u64));
    group.bench_function("run_full", |b| {
        b.iter_batched(
            || {
                SimulationBuilder::new()
                    .population(2_000)
                    .contacts(4)
                    .clustering(0.3)
                    .transmission(0.05)
                    .latent_period(3)
                    .infectious_period(7)
                    .initial_exposed(10)
                    .simulations(simulations)
                    .days(days)
                    .seed(42)
                    .build()
                    .unwrap()
            },
            |ensemble| black_box(ensemble.run().unwrap()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_network_build,
    bench_replicate_step,
    bench_ensemble_run
);
criterion_main!(benches);
