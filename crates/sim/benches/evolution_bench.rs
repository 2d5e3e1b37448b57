use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use exprevo_sim::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation");
    let genes = 1000;
    group.throughput(Throughput::Elements(genes as u64));

    for rate in [0.01, 0.3, 1.0] {
        let model = PointMutation::new(rate, 0.05).unwrap();
        group.bench_function(format!("point_rate_{rate}"), |b| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
            let mut ind = Individual::uniform(genes, 1.0);
            b.iter(|| {
                model.mutate(&mut ind, &mut rng);
                black_box(&ind);
            })
        });
    }

    group.finish();
}

fn bench_tf_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("regulation");
    let genes = 500;

    for density in [0.01, 0.1] {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let network = RegulatoryNetwork::random(genes, density, 1.0, &mut rng).unwrap();
        let levels = vec![1.0; genes];
        group.throughput(Throughput::Elements(network.edge_count() as u64));

        group.bench_function(format!("tf_inputs_density_{density}"), |b| {
            let mut inputs = Vec::new();
            b.iter(|| {
                network.tf_inputs(black_box(&levels), &mut inputs);
                black_box(&inputs);
            })
        });
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let genes = 100;
    let ind = Individual::uniform(genes, 1.0);

    let proportional: SelectionModel = ProportionalSelection::new().into();
    group.bench_function("proportional", |b| {
        b.iter(|| black_box(proportional.fitness_of(black_box(&ind)).unwrap()))
    });

    let epistatic: SelectionModel = EpistaticSelection::new(vec![vec![0.01; genes]; genes])
        .unwrap()
        .into();
    group.bench_function("epistatic_100x100", |b| {
        b.iter(|| black_box(epistatic.fitness_of(black_box(&ind)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_mutation, bench_tf_inputs, bench_selection);
criterion_main!(benches);
