//! Tests for the recorder driven by a live simulation.

use exprevo_sim::prelude::*;

fn build_simulation(generations: usize) -> Simulation {
    SimulationBuilder::new()
        .population_size(4)
        .genes_per_individual(3)
        .generations(generations)
        .expression(LinearExpression::new(1.0, 0.5).unwrap())
        .mutation_rate(0.5, 0.1)
        .conditions(Conditions::new().with_tf_concentration(0.25))
        .seed(42)
        .build()
        .unwrap()
}

#[test]
fn test_recorder_collects_every_generation() {
    let mut sim = build_simulation(10);
    let mut recorder = Recorder::new(RecordingStrategy::All);

    recorder.record(sim.population());
    for _ in 0..10 {
        sim.step().unwrap();
        recorder.record(sim.population());
    }

    assert_eq!(recorder.len(), 11);
    let generations: Vec<usize> = recorder.records().map(|r| r.generation).collect();
    assert_eq!(generations, (0..=10).collect::<Vec<_>>());

    // Three-tier granularity per record.
    let latest = recorder.latest().unwrap();
    assert_eq!(latest.individuals.len(), 4);
    assert_eq!(latest.genes.len(), 12);
}

#[test]
fn test_recorder_retention_bounds_history() {
    let mut sim = build_simulation(50);
    let mut recorder = Recorder::new(RecordingStrategy::All).with_retention(5);

    for _ in 0..50 {
        sim.step().unwrap();
        recorder.record(sim.population());
    }

    assert_eq!(recorder.len(), 5);
    let generations: Vec<usize> = recorder.records().map(|r| r.generation).collect();
    assert_eq!(generations, vec![46, 47, 48, 49, 50]);
}

#[test]
fn test_recorded_fitness_matches_population() {
    let mut sim = build_simulation(5);
    let mut recorder = Recorder::new(RecordingStrategy::All);

    sim.step().unwrap();
    recorder.record(sim.population());

    let record = recorder.latest().unwrap();
    assert_eq!(record.model.mean_fitness, sim.population().mean_fitness());
    for (rec, ind) in record
        .individuals
        .iter()
        .zip(sim.population().individuals())
    {
        assert_eq!(rec.fitness, ind.fitness());
        assert_eq!(rec.mean_expression, ind.mean_expression());
    }
}

#[test]
fn test_csv_export_shape() {
    let mut sim = build_simulation(3);
    let mut recorder = Recorder::new(RecordingStrategy::All);

    for _ in 0..3 {
        sim.step().unwrap();
        recorder.record(sim.population());
    }

    let model_csv = recorder.to_csv(RecordTier::Model);
    assert_eq!(model_csv.lines().count(), 4); // header + 3 generations

    let gene_csv = recorder.to_csv(RecordTier::Gene);
    assert_eq!(gene_csv.lines().count(), 1 + 3 * 4 * 3);
    assert!(gene_csv.starts_with("generation,individual,gene,expression\n"));
}
