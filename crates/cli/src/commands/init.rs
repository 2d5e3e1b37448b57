use anyhow::{bail, Context, Result};
use exprevo_sim::base::Conditions;
use exprevo_sim::evolution::{
    ConstantExpression, ExpressionModel, LinearExpression, PointMutation, ProportionalSelection,
    RegulatoryNetwork, SelectionModel, SigmoidalExpression, ThresholdSelection,
};
use exprevo_sim::simulation::{
    Configuration, EvolutionConfig, ExecutionConfig, InitializationConfig, Simulation,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::args::InitArgs;
use crate::printing::print_parameters;

pub fn init_simulation(args: &InitArgs) -> Result<()> {
    println!("🧬 Exprevo - Gene Expression Evolution Simulator");
    println!("============================================\n");

    let config = build_configuration(args)?;

    // Validate the whole configuration up front so a bad file never lands
    // on disk.
    Simulation::new(config.clone())
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Invalid configuration")?;

    let json = serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_parameters(&config);

    println!("\n✓ Simulation initialized successfully!");
    println!(
        "💡 Use 'exprevo run -c {}' to execute it",
        args.output.display()
    );

    Ok(())
}

fn build_configuration(args: &InitArgs) -> Result<Configuration> {
    let expression: ExpressionModel = match args.expression.as_str() {
        "constant" => ConstantExpression::new(args.level)
            .map_err(|e| anyhow::anyhow!("{e}"))?
            .into(),
        "linear" => LinearExpression::new(args.slope, args.intercept)
            .map_err(|e| anyhow::anyhow!("{e}"))?
            .into(),
        "sigmoidal" => SigmoidalExpression::new(args.vmax, args.half_saturation, args.hill_n)
            .map_err(|e| anyhow::anyhow!("{e}"))?
            .into(),
        other => bail!("Unknown expression model '{other}'. Use: constant, linear, or sigmoidal"),
    };

    let selection: SelectionModel = match args.selection.as_str() {
        "proportional" => ProportionalSelection::new().into(),
        "threshold" => ThresholdSelection::new(args.threshold)
            .map_err(|e| anyhow::anyhow!("{e}"))?
            .into(),
        other => bail!("Unknown selection model '{other}'. Use: proportional or threshold"),
    };

    let mutation = PointMutation::new(args.mutation_rate, args.mutation_noise)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let regulation = match args.regulation_density {
        Some(density) => {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(args.regulation_seed);
            Some(
                RegulatoryNetwork::random(args.genes, density, args.regulation_weight, &mut rng)
                    .map_err(|e| anyhow::anyhow!("{e}"))?,
            )
        }
        None => None,
    };

    Ok(Configuration {
        execution: ExecutionConfig::new(args.population_size, args.generations, args.seed),
        initialization: InitializationConfig::new(args.genes, args.initial_level),
        evolution: EvolutionConfig {
            expression,
            selection,
            mutation: mutation.into(),
            regulation,
        },
        conditions: Conditions::new()
            .with_tf_concentration(args.tf_concentration)
            .with_temperature(args.temperature)
            .with_nutrient_level(args.nutrient_level),
    })
}
