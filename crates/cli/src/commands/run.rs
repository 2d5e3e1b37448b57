use anyhow::{Context, Result};
use exprevo_sim::simulation::{Configuration, Simulation};
use exprevo_sim::storage::{RecordTier, Recorder, RecordingStrategy};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use crate::printing::print_parameters;

#[allow(clippy::too_many_arguments)]
pub fn run_simulation(
    config_path: &PathBuf,
    output: &PathBuf,
    record_every: usize,
    retain: Option<usize>,
    format: &str,
    seed_override: Option<u64>,
    show_progress: bool,
) -> Result<()> {
    println!("🧬 Exprevo - Running Simulation");
    println!("============================================\n");

    let mut config = load_configuration(config_path)?;

    if let Some(seed) = seed_override {
        config.execution.seed = Some(seed);
    }

    let total_generations = config.execution.total_generations;

    let mut sim = Simulation::new(config)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to initialize simulation")?;

    println!("Configuration:");
    print_parameters(sim.configuration());

    let mut recorder = Recorder::new(RecordingStrategy::EveryN(record_every));
    if let Some(cap) = retain {
        recorder = recorder.with_retention(cap);
    }

    println!("\nRunning {total_generations} generations...");

    let pb = if show_progress {
        let pb = ProgressBar::new(total_generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Baseline snapshot before the first step.
    recorder.record(sim.population());

    for generation in 1..=total_generations {
        sim.step()
            .map_err(|e| anyhow::anyhow!("Generation {generation}: {e}"))?;
        recorder.record(sim.population());

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    export_records(&recorder, output, format)?;

    println!("\n✓ Simulation complete!");
    println!("  Final generation: {}", sim.generation());
    println!("  Mean fitness: {:.6}", sim.population().mean_fitness());
    println!(
        "  Mean expression: {:.6}",
        sim.population().mean_expression()
    );
    println!("  Records exported to: {}", output.display());

    Ok(())
}

fn load_configuration(path: &Path) -> Result<Configuration> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}. Did you run 'exprevo init' first?", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse configuration {}", path.display()))
}

fn export_records(recorder: &Recorder, output: &Path, format: &str) -> Result<()> {
    std::fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    match format {
        "csv" => {
            for (tier, file_name) in [
                (RecordTier::Model, "model.csv"),
                (RecordTier::Individual, "individuals.csv"),
                (RecordTier::Gene, "genes.csv"),
            ] {
                let path = output.join(file_name);
                std::fs::write(&path, recorder.to_csv(tier))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
        "json" => {
            let records: Vec<_> = recorder.records().collect();
            let path = output.join("records.json");
            let json = serde_json::to_string_pretty(&records)
                .context("Failed to serialize records")?;
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        other => anyhow::bail!("Unknown format '{other}'. Use: csv or json"),
    }

    Ok(())
}
