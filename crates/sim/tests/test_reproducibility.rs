//! Test reproducibility of the simulation with fixed seeds.

use exprevo_sim::prelude::*;

fn run_simulation(seed: u64) -> Vec<Individual> {
    let mut sim = SimulationBuilder::new()
        .population_size(20)
        .genes_per_individual(8)
        .generations(25)
        .expression(LinearExpression::new(1.5, 0.2).unwrap())
        .mutation_rate(0.3, 0.1)
        .conditions(Conditions::new().with_tf_concentration(0.4))
        .seed(seed)
        .build()
        .unwrap();

    sim.run().unwrap();
    sim.population().individuals().to_vec()
}

fn run_regulated_simulation(seed: u64) -> Vec<Individual> {
    let mut network_rng = {
        use rand::SeedableRng;
        rand_xoshiro::Xoshiro256PlusPlus::seed_from_u64(seed)
    };
    let network = RegulatoryNetwork::random(8, 0.25, 0.5, &mut network_rng).unwrap();

    let mut sim = SimulationBuilder::new()
        .population_size(20)
        .genes_per_individual(8)
        .generations(25)
        .expression(SigmoidalExpression::new(2.0, 0.5, 4.0).unwrap())
        .mutation_rate(0.3, 0.1)
        .regulation(network)
        .conditions(Conditions::new().with_tf_concentration(0.4))
        .seed(seed)
        .build()
        .unwrap();

    sim.run().unwrap();
    sim.population().individuals().to_vec()
}

#[test]
fn test_same_seed_is_bit_identical() {
    let results1 = run_simulation(42);
    let results2 = run_simulation(42);

    assert_eq!(results1.len(), results2.len());
    for (ind1, ind2) in results1.iter().zip(results2.iter()) {
        // Bit-for-bit: exact f64 equality, no tolerance.
        assert_eq!(ind1.expression_levels(), ind2.expression_levels());
        assert_eq!(ind1.fitness(), ind2.fitness());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let results1 = run_simulation(42);
    let results2 = run_simulation(123);

    assert_eq!(results1.len(), results2.len());
    let any_different = results1
        .iter()
        .zip(results2.iter())
        .any(|(a, b)| a.expression_levels() != b.expression_levels());
    assert!(
        any_different,
        "Simulations with different seeds should produce different results"
    );
}

#[test]
fn test_regulated_run_is_reproducible() {
    let results1 = run_regulated_simulation(7);
    let results2 = run_regulated_simulation(7);

    for (ind1, ind2) in results1.iter().zip(results2.iter()) {
        assert_eq!(ind1.expression_levels(), ind2.expression_levels());
        assert_eq!(ind1.fitness(), ind2.fitness());
    }
}

#[test]
fn test_generation_by_generation_states_match() {
    let build = || {
        SimulationBuilder::new()
            .population_size(10)
            .genes_per_individual(5)
            .expression(LinearExpression::new(1.0, 0.1).unwrap())
            .mutation_rate(0.5, 0.2)
            .conditions(Conditions::new().with_tf_concentration(0.3))
            .seed(99)
            .build()
            .unwrap()
    };

    let mut sim1 = build();
    let mut sim2 = build();

    for _ in 0..10 {
        sim1.step().unwrap();
        sim2.step().unwrap();
        assert_eq!(sim1.generation(), sim2.generation());
        for (a, b) in sim1
            .population()
            .individuals()
            .iter()
            .zip(sim2.population().individuals())
        {
            assert_eq!(a.expression_levels(), b.expression_levels());
            assert_eq!(a.fitness(), b.fitness());
        }
    }
}
