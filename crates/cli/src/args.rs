use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration file
    #[arg(short, long, default_value = "simulation.json")]
    pub output: PathBuf,

    /// Population size
    #[arg(short = 'n', long, default_value = "100")]
    pub population_size: usize,

    /// Number of generations
    #[arg(short = 'g', long, default_value = "200")]
    pub generations: usize,

    /// Genes per individual
    #[arg(long, default_value = "10")]
    pub genes: usize,

    /// Initial expression level for every gene
    #[arg(long, default_value = "0.0")]
    pub initial_level: f64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Expression model (constant, linear, sigmoidal)
    #[arg(long, default_value = "constant")]
    pub expression: String,

    /// Expression level (constant model)
    #[arg(long, default_value = "1.0")]
    pub level: f64,

    /// Response slope (linear model; negative = repression)
    #[arg(long, default_value = "1.0")]
    pub slope: f64,

    /// Basal expression (linear model)
    #[arg(long, default_value = "0.0")]
    pub intercept: f64,

    /// Maximal expression (sigmoidal model)
    #[arg(long, default_value = "1.0")]
    pub vmax: f64,

    /// Half-saturation TF concentration (sigmoidal model)
    #[arg(long, default_value = "0.5")]
    pub half_saturation: f64,

    /// Hill coefficient (sigmoidal model)
    #[arg(long, default_value = "2.0")]
    pub hill_n: f64,

    /// Selection model (proportional, threshold)
    #[arg(long, default_value = "proportional")]
    pub selection: String,

    /// Viability cutoff on mean expression (threshold model)
    #[arg(long, default_value = "0.5")]
    pub threshold: f64,

    /// Per-gene mutation probability
    #[arg(long, default_value = "0.1")]
    pub mutation_rate: f64,

    /// Standard deviation of the mutation perturbation
    #[arg(long, default_value = "0.05")]
    pub mutation_noise: f64,

    /// Transcription-factor concentration
    #[arg(long, default_value = "0.5")]
    pub tf_concentration: f64,

    /// Temperature
    #[arg(long, default_value = "37.0")]
    pub temperature: f64,

    /// Nutrient level
    #[arg(long, default_value = "1.0")]
    pub nutrient_level: f64,

    /// Enable a random regulatory network at this edge density (0.0-1.0)
    #[arg(long)]
    pub regulation_density: Option<f64>,

    /// Weight scale for random regulatory edges
    #[arg(long, default_value = "0.5")]
    pub regulation_weight: f64,

    /// Seed for sampling the random regulatory network
    #[arg(long, default_value = "0")]
    pub regulation_seed: u64,
}
