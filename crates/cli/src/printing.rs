use exprevo_sim::evolution::{ExpressionModel, MutationModel, SelectionModel};
use exprevo_sim::simulation::Configuration;

pub fn print_parameters(config: &Configuration) {
    let execution = &config.execution;
    let initialization = &config.initialization;
    let evolution = &config.evolution;
    let conditions = &config.conditions;

    println!("\n📋 Simulation Configuration");
    println!(
        "  • Population Size: {} [-n, --population-size]",
        execution.population_size
    );
    println!(
        "  • Generations: {} [-g, --generations]",
        execution.total_generations
    );
    if let Some(seed) = execution.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🧬 Genome Structure");
    println!(
        "  • Genes per Individual: {} [--genes]",
        initialization.genes_per_individual
    );
    println!(
        "  • Initial Expression Level: {} [--initial-level]",
        initialization.initial_level
    );

    println!("\n🧪 Expression Model");
    match &evolution.expression {
        ExpressionModel::Constant(m) => {
            println!("  • Constant at level {} [--level]", m.level());
        }
        ExpressionModel::Linear(m) => {
            println!(
                "  • Linear: slope {} [--slope], intercept {} [--intercept]",
                m.slope(),
                m.intercept()
            );
        }
        ExpressionModel::Sigmoidal(m) => {
            println!(
                "  • Sigmoidal: vmax {} [--vmax], K {} [--half-saturation], n {} [--hill-n]",
                m.vmax(),
                m.k(),
                m.n()
            );
        }
    }

    println!("\n🎯 Selection Model");
    match &evolution.selection {
        SelectionModel::Proportional(_) => {
            println!("  • Proportional (fitness = mean expression)");
        }
        SelectionModel::Threshold(m) => {
            println!(
                "  • Threshold at mean expression >= {} [--threshold]",
                m.threshold()
            );
        }
        SelectionModel::Epistatic(m) => {
            println!("  • Epistatic: {0}x{0} interaction matrix", m.dimension());
        }
        SelectionModel::MultiObjective(m) => {
            println!("  • Multi-objective: {} weights", m.objective_count());
        }
    }

    println!("\n⚡ Mutation Parameters");
    let MutationModel::Point(m) = &evolution.mutation;
    if m.rate() > 0.0 {
        println!(
            "  • Point Mutation: rate {:.3} [--mutation-rate], noise {:.3} [--mutation-noise]",
            m.rate(),
            m.noise_scale()
        );
    } else {
        println!("  • Point Mutation: Disabled");
    }

    println!("\n🔀 Regulatory Network");
    if let Some(network) = &evolution.regulation {
        println!(
            "  • {} edges over {} genes [--regulation-density]",
            network.edge_count(),
            network.gene_count()
        );
    } else {
        println!("  • Disabled");
    }

    println!("\n🌡️  Conditions");
    println!(
        "  • TF Concentration: {} [--tf-concentration]",
        conditions.tf_concentration()
    );
    println!("  • Temperature: {} [--temperature]", conditions.temperature());
    println!(
        "  • Nutrient Level: {} [--nutrient-level]",
        conditions.nutrient_level()
    );
}
