mod args;
mod commands;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::InitArgs;
use commands::{init, inspect, run, sweep};

/// Exprevo: A Gene Expression Evolution Simulator
///
/// Simulates how gene expression levels in a population change over
/// generations under expression dynamics, selection, and mutation.
#[derive(Parser, Debug)]
#[command(name = "exprevo")]
#[command(author, version, about = "Simulates the evolution of gene expression", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a new simulation configuration file.
    ///
    /// Sets up the parameters for a new experiment (population size, models,
    /// mutation rates, etc.) but does not run it yet.
    Init(Box<InitArgs>),

    /// Run a configured simulation and export its records.
    Run {
        /// Configuration file written by `init`
        #[arg(short, long, default_value = "simulation.json")]
        config: PathBuf,

        /// Directory for exported record tables
        #[arg(short, long, default_value = "records")]
        output: PathBuf,

        /// Record every N generations
        #[arg(long, default_value = "1")]
        record_every: usize,

        /// Retain at most this many recorded generations (oldest dropped)
        #[arg(long)]
        retain: Option<usize>,

        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Override random seed (default: use configured seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Disable the progress bar
        #[arg(long)]
        quiet: bool,
    },

    /// Show the configuration of a simulation file.
    Inspect {
        /// Configuration file
        #[arg(short, long, default_value = "simulation.json")]
        config: PathBuf,
    },

    /// Run a parameter sweep and report sensitivity indices.
    Sweep {
        /// Base configuration file
        #[arg(short, long, default_value = "simulation.json")]
        config: PathBuf,

        /// Swept parameter as name=low:high (repeatable)
        #[arg(short, long = "param", required = true)]
        params: Vec<String>,

        /// Number of sampled configurations
        #[arg(short = 'm', long, default_value = "64")]
        samples: usize,

        /// Number of value bins per parameter
        #[arg(long, default_value = "8")]
        bins: usize,

        /// Master seed for sampling and per-run seeds
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Init(args) => {
            init::init_simulation(&args)?;
        }
        Commands::Run {
            config,
            output,
            record_every,
            retain,
            format,
            seed,
            quiet,
        } => {
            run::run_simulation(&config, &output, record_every, retain, &format, seed, !quiet)?;
        }
        Commands::Inspect { config } => {
            inspect::show_configuration(&config)?;
        }
        Commands::Sweep {
            config,
            params,
            samples,
            bins,
            seed,
        } => {
            sweep::run_sweep(&config, &params, samples, bins, seed)?;
        }
    }

    Ok(())
}
