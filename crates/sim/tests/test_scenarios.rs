//! Scenario tests pinning whole-run behavior.

use exprevo_sim::prelude::*;

/// Neutral drift: proportional selection on constant expression is
/// fitness-neutral. Mutation perturbs genes every generation, but the
/// expression phase overwrites them from the constant model before selection
/// sees them, so fitness stays exactly 1.0 for the entire run.
#[test]
fn test_neutral_drift_fitness_stays_at_one() {
    let mut sim = SimulationBuilder::new()
        .population_size(100)
        .genes_per_individual(10)
        .generations(200)
        .expression(ConstantExpression::new(1.0).unwrap())
        .selection(ProportionalSelection::new())
        .mutation_rate(0.3, 0.05)
        .seed(42)
        .build()
        .unwrap();

    for _ in 0..200 {
        sim.step().unwrap();
        for ind in sim.population().individuals() {
            assert_eq!(ind.fitness(), 1.0);
        }
    }
    assert_eq!(sim.generation(), 200);
}

/// Hill saturation: a near-step response just above its half-saturation
/// point must sit at vmax without overflowing.
#[test]
fn test_hill_saturation_switch_regime() {
    let mut sim = SimulationBuilder::new()
        .population_size(20)
        .genes_per_individual(5)
        .generations(10)
        .expression(SigmoidalExpression::new(2.0, 1.0, 100.0).unwrap())
        .conditions(Conditions::new().with_tf_concentration(1.05))
        .seed(42)
        .build()
        .unwrap();

    sim.run().unwrap();

    for ind in sim.population().individuals() {
        for gene in ind.genes() {
            assert!(gene.level().is_finite());
            assert!(gene.level() > 1.9, "expected near-vmax, got {}", gene.level());
            assert!(gene.level() <= 2.0);
        }
    }
}

/// Repression: a linear model with negative slope silences expression once
/// TF concentration passes the intercept.
#[test]
fn test_repression_silences_expression() {
    let mut sim = SimulationBuilder::new()
        .population_size(10)
        .genes_per_individual(3)
        .generations(5)
        .expression(LinearExpression::new(-1.0, 0.3).unwrap())
        .conditions(Conditions::new().with_tf_concentration(0.5))
        .seed(42)
        .build()
        .unwrap();

    sim.run().unwrap();

    for ind in sim.population().individuals() {
        for gene in ind.genes() {
            assert_eq!(gene.level(), 0.0);
        }
        assert_eq!(ind.fitness(), 0.0);
    }
}

/// A self-activating regulatory loop drives expression upward over
/// generations until the Hill response saturates at vmax.
#[test]
fn test_positive_feedback_saturates() {
    let network = RegulatoryNetwork::new(
        2,
        vec![
            RegulatoryEdge::new(0, 0, 1.0),
            RegulatoryEdge::new(0, 1, 1.0),
        ],
    )
    .unwrap();

    let mut sim = SimulationBuilder::new()
        .population_size(5)
        .genes_per_individual(2)
        .generations(50)
        .initial_level(0.6)
        .expression(SigmoidalExpression::new(3.0, 0.5, 2.0).unwrap())
        .regulation(network)
        .seed(42)
        .build()
        .unwrap();

    sim.run().unwrap();

    // Feedback from gene 0 keeps both genes high in the saturated regime.
    for ind in sim.population().individuals() {
        for gene in ind.genes() {
            assert!(gene.level() > 2.5, "expected saturation, got {}", gene.level());
        }
    }
}
