//! Batch execution over sampled parameter combinations.
//!
//! A batch runner clones a base configuration, applies each sampled
//! parameter combination to it, and runs one simulation per sample with an
//! independently derived seed. Because identical (configuration, seed) pairs
//! reproduce identical trajectories, the whole batch is reproducible from
//! the master seed alone.

use exprevo_sim::evolution::{ExpressionModel, MutationModel, PointMutation, SelectionModel};
use exprevo_sim::evolution::{
    ConstantExpression, LinearExpression, SigmoidalExpression, ThresholdSelection,
};
use exprevo_sim::simulation::{Configuration, Simulation};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::error;
use std::fmt;

/// Errors that can occur when configuring or running a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchError {
    /// A parameter specification is malformed.
    InvalidSpec(String),
    /// A parameter name is not understood by the batch runner.
    UnknownParameter(String),
    /// A sampled value was rejected by a model constructor.
    InvalidParameter(String),
    /// A simulation failed to construct or run.
    Simulation(String),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpec(msg) => write!(f, "Invalid parameter spec: {msg}"),
            Self::UnknownParameter(name) => write!(f, "Unknown parameter: {name}"),
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter value: {msg}"),
            Self::Simulation(msg) => write!(f, "Simulation failed: {msg}"),
        }
    }
}

impl error::Error for BatchError {}

/// One swept parameter: a name understood by the runner and a closed value
/// range to sample from.
///
/// Understood names: `tf_concentration`, `temperature`, `nutrient_level`,
/// `mutation_rate`, `mutation_noise`, `expression_level`, `slope`,
/// `intercept`, `vmax`, `k`, `hill_n`, `threshold`. Model-specific names
/// apply only when the base configuration uses that model variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub low: f64,
    pub high: f64,
}

impl ParameterSpec {
    /// Create a parameter spec.
    ///
    /// # Errors
    /// Returns an error if the bounds are non-finite or inverted.
    pub fn new(name: impl Into<String>, low: f64, high: f64) -> Result<Self, BatchError> {
        let name = name.into();
        if !low.is_finite() || !high.is_finite() {
            return Err(BatchError::InvalidSpec(format!(
                "bounds for '{name}' must be finite, got [{low}, {high}]"
            )));
        }
        if low > high {
            return Err(BatchError::InvalidSpec(format!(
                "bounds for '{name}' are inverted: [{low}, {high}]"
            )));
        }
        Ok(Self { name, low, high })
    }
}

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Base configuration each sample starts from
    pub base: Configuration,
    /// Parameters to sweep
    pub parameters: Vec<ParameterSpec>,
    /// Number of sampled configurations
    pub samples: usize,
    /// Master seed; sample values and per-run seeds all derive from it
    pub master_seed: u64,
}

/// Result of one sampled simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Sampled parameter values, parallel to the batch's parameter specs
    pub values: Vec<f64>,
    /// Seed the run executed under
    pub seed: u64,
    /// Mean population fitness at the end of the run
    pub mean_fitness: f64,
    /// Mean population expression at the end of the run
    pub mean_expression: f64,
}

/// Runs many simulations across sampled parameter combinations.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    config: BatchConfig,
}

impl BatchRunner {
    /// Create a batch runner, validating the sweep against the base
    /// configuration.
    ///
    /// Every parameter name is probed against a clone of the base
    /// configuration so that an unknown or inapplicable name fails here
    /// rather than deep into the batch.
    pub fn new(config: BatchConfig) -> Result<Self, BatchError> {
        if config.samples == 0 {
            return Err(BatchError::InvalidSpec(
                "sample count must be greater than 0".into(),
            ));
        }
        if config.parameters.is_empty() {
            return Err(BatchError::InvalidSpec(
                "at least one parameter must be swept".into(),
            ));
        }

        let mut probe = config.base.clone();
        for spec in &config.parameters {
            apply_parameter(&mut probe, &spec.name, spec.low)?;
        }
        Simulation::new(probe).map_err(|e| BatchError::Simulation(e.to_string()))?;

        Ok(Self { config })
    }

    /// The validated batch configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Execute the batch, returning one outcome per sample.
    ///
    /// Sample values and per-run seeds are drawn sequentially from the
    /// master seed before the runs execute in parallel, so the outcome set
    /// is reproducible regardless of thread schedule.
    pub fn run(&self) -> Result<Vec<BatchOutcome>, BatchError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.config.master_seed);
        let specs = &self.config.parameters;

        let sample_values: Vec<Vec<f64>> = (0..self.config.samples)
            .map(|_| {
                specs
                    .iter()
                    .map(|spec| {
                        if spec.high > spec.low {
                            rng.random_range(spec.low..spec.high)
                        } else {
                            spec.low
                        }
                    })
                    .collect()
            })
            .collect();

        let seeds: Vec<u64> = (0..self.config.samples).map(|_| rng.random()).collect();

        sample_values
            .into_par_iter()
            .zip(seeds.into_par_iter())
            .map(|(values, seed)| {
                let mut config = self.config.base.clone();
                for (spec, &value) in specs.iter().zip(values.iter()) {
                    apply_parameter(&mut config, &spec.name, value)?;
                }
                config.execution.seed = Some(seed);

                let mut sim =
                    Simulation::new(config).map_err(|e| BatchError::Simulation(e.to_string()))?;
                sim.run().map_err(|e| BatchError::Simulation(e.to_string()))?;

                Ok(BatchOutcome {
                    values,
                    seed,
                    mean_fitness: sim.population().mean_fitness(),
                    mean_expression: sim.population().mean_expression(),
                })
            })
            .collect()
    }
}

/// Write one sampled value into a configuration.
fn apply_parameter(config: &mut Configuration, name: &str, value: f64) -> Result<(), BatchError> {
    let invalid = |e: &dyn fmt::Display| BatchError::InvalidParameter(format!("{name}: {e}"));

    match name {
        "tf_concentration" => {
            config.conditions = config.conditions.clone().with_tf_concentration(value);
        }
        "temperature" => {
            config.conditions = config.conditions.clone().with_temperature(value);
        }
        "nutrient_level" => {
            config.conditions = config.conditions.clone().with_nutrient_level(value);
        }
        "mutation_rate" => {
            let MutationModel::Point(m) = &mut config.evolution.mutation;
            *m = PointMutation::new(value, m.noise_scale()).map_err(|e| invalid(&e))?;
        }
        "mutation_noise" => {
            let MutationModel::Point(m) = &mut config.evolution.mutation;
            *m = PointMutation::new(m.rate(), value).map_err(|e| invalid(&e))?;
        }
        "expression_level" => match &mut config.evolution.expression {
            ExpressionModel::Constant(m) => {
                *m = ConstantExpression::new(value).map_err(|e| invalid(&e))?;
            }
            other => return Err(inapplicable(name, other.name())),
        },
        "slope" => match &mut config.evolution.expression {
            ExpressionModel::Linear(m) => {
                *m = LinearExpression::new(value, m.intercept()).map_err(|e| invalid(&e))?;
            }
            other => return Err(inapplicable(name, other.name())),
        },
        "intercept" => match &mut config.evolution.expression {
            ExpressionModel::Linear(m) => {
                *m = LinearExpression::new(m.slope(), value).map_err(|e| invalid(&e))?;
            }
            other => return Err(inapplicable(name, other.name())),
        },
        "vmax" => match &mut config.evolution.expression {
            ExpressionModel::Sigmoidal(m) => {
                *m = SigmoidalExpression::new(value, m.k(), m.n()).map_err(|e| invalid(&e))?;
            }
            other => return Err(inapplicable(name, other.name())),
        },
        "k" => match &mut config.evolution.expression {
            ExpressionModel::Sigmoidal(m) => {
                *m = SigmoidalExpression::new(m.vmax(), value, m.n()).map_err(|e| invalid(&e))?;
            }
            other => return Err(inapplicable(name, other.name())),
        },
        "hill_n" => match &mut config.evolution.expression {
            ExpressionModel::Sigmoidal(m) => {
                *m = SigmoidalExpression::new(m.vmax(), m.k(), value).map_err(|e| invalid(&e))?;
            }
            other => return Err(inapplicable(name, other.name())),
        },
        "threshold" => match &mut config.evolution.selection {
            SelectionModel::Threshold(m) => {
                *m = ThresholdSelection::new(value).map_err(|e| invalid(&e))?;
            }
            other => return Err(inapplicable(name, other.name())),
        },
        _ => return Err(BatchError::UnknownParameter(name.to_string())),
    }
    Ok(())
}

fn inapplicable(name: &str, model: &str) -> BatchError {
    BatchError::InvalidParameter(format!(
        "parameter '{name}' does not apply to the configured {model}"
    ))
}
