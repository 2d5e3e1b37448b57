//! Simulation parameters and configuration.
//!
//! The master [`Configuration`] struct fully determines a run: together with
//! the seed it reproduces a simulation bit for bit. It can be serialized to
//! and from a file (the CLI uses JSON) to make runs repeatable.

use crate::base::Conditions;
use crate::evolution::{ExpressionModel, MutationModel, RegulatoryNetwork, SelectionModel};
use serde::{Deserialize, Serialize};

/// The master configuration struct.
/// Can be deserialized from a file to fully reproduce a simulation setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub execution: ExecutionConfig,
    pub initialization: InitializationConfig,
    pub evolution: EvolutionConfig,
    /// Shared environmental snapshot for every generation
    #[serde(default)]
    pub conditions: Conditions,
}

/// High-level execution parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Number of individuals in the population
    pub population_size: usize,
    /// Total number of generations to simulate
    pub total_generations: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl ExecutionConfig {
    /// Create new execution configuration.
    pub fn new(population_size: usize, total_generations: usize, seed: Option<u64>) -> Self {
        Self {
            population_size,
            total_generations,
            seed,
        }
    }
}

/// Configuration for the initial population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializationConfig {
    /// Genes per individual, uniform across the population
    pub genes_per_individual: usize,
    /// Initial expression level for every gene
    pub initial_level: f64,
}

impl InitializationConfig {
    /// Create new initialization configuration.
    pub fn new(genes_per_individual: usize, initial_level: f64) -> Self {
        Self {
            genes_per_individual,
            initial_level,
        }
    }
}

/// Grouped evolutionary parameters: the three model families plus the
/// optional regulatory network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub expression: ExpressionModel,
    pub selection: SelectionModel,
    pub mutation: MutationModel,
    /// Regulation is strictly optional; absent means every gene sees the
    /// shared TF concentration unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulation: Option<RegulatoryNetwork>,
}
