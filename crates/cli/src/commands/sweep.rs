use anyhow::{bail, Context, Result};
use exprevo_analysis::{first_order_indices, BatchConfig, BatchRunner, ParameterSpec};
use exprevo_sim::simulation::Configuration;
use std::path::Path;

pub fn run_sweep(
    config_path: &Path,
    params: &[String],
    samples: usize,
    bins: usize,
    seed: u64,
) -> Result<()> {
    println!("🧬 Exprevo - Parameter Sweep");
    println!("============================================\n");

    let text = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let base: Configuration = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse configuration {}", config_path.display()))?;

    let parameters = params
        .iter()
        .map(|p| parse_param(p))
        .collect::<Result<Vec<_>>>()?;

    println!("Sweeping {} parameter(s) over {samples} samples:", parameters.len());
    for spec in &parameters {
        println!("  • {} in [{}, {}]", spec.name, spec.low, spec.high);
    }

    let runner = BatchRunner::new(BatchConfig {
        base,
        parameters: parameters.clone(),
        samples,
        master_seed: seed,
    })
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("Invalid sweep configuration")?;

    println!("\nRunning batch...");
    let outcomes = runner
        .run()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Batch execution failed")?;

    let indices = first_order_indices(&parameters, &outcomes, bins)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    println!("\n📊 First-order sensitivity of mean fitness");
    println!("  {:<20} {:>12}", "parameter", "index");
    for index in &indices {
        println!("  {:<20} {:>12.4}", index.name, index.first_order);
    }

    let mean_fitness =
        outcomes.iter().map(|o| o.mean_fitness).sum::<f64>() / outcomes.len() as f64;
    println!("\n✓ Sweep complete over {} runs", outcomes.len());
    println!("  Mean fitness across samples: {mean_fitness:.6}");

    Ok(())
}

/// Parse a swept parameter given as `name=low:high`.
fn parse_param(input: &str) -> Result<ParameterSpec> {
    let Some((name, range)) = input.split_once('=') else {
        bail!("Invalid parameter '{input}'. Expected name=low:high");
    };
    let Some((low, high)) = range.split_once(':') else {
        bail!("Invalid range in '{input}'. Expected name=low:high");
    };
    let low: f64 = low
        .trim()
        .parse()
        .with_context(|| format!("Invalid lower bound in '{input}'"))?;
    let high: f64 = high
        .trim()
        .parse()
        .with_context(|| format!("Invalid upper bound in '{input}'"))?;

    ParameterSpec::new(name.trim(), low, high).map_err(|e| anyhow::anyhow!("{e}"))
}
