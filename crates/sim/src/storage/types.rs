//! Record types for the generation data collector.

use crate::simulation::Population;
use serde::{Deserialize, Serialize};

/// Recording strategy for when to capture simulation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordingStrategy {
    /// Record every N generations.
    EveryN(usize),

    /// Record at specific generations.
    Specific(Vec<usize>),

    /// Record all generations.
    All,

    /// No recording.
    None,
}

impl RecordingStrategy {
    /// Check if a generation should be recorded.
    pub fn should_record(&self, generation: usize) -> bool {
        match self {
            Self::EveryN(n) => *n != 0 && generation % n == 0,
            Self::Specific(gens) => gens.contains(&generation),
            Self::All => true,
            Self::None => false,
        }
    }
}

/// Model-level summary of one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub generation: usize,
    pub population_size: usize,
    pub mean_fitness: f64,
    pub max_fitness: f64,
    pub mean_expression: f64,
}

/// Per-individual state within one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualRecord {
    pub generation: usize,
    pub individual: usize,
    pub fitness: f64,
    pub mean_expression: f64,
}

/// Per-gene expression within one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneRecord {
    pub generation: usize,
    pub individual: usize,
    pub gene: usize,
    pub expression: f64,
}

/// Full three-tier snapshot of one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: usize,
    pub model: ModelRecord,
    pub individuals: Vec<IndividualRecord>,
    pub genes: Vec<GeneRecord>,
}

impl GenerationRecord {
    /// Capture a snapshot of the population's current state.
    pub fn capture(population: &Population) -> Self {
        let generation = population.generation();

        let model = ModelRecord {
            generation,
            population_size: population.size(),
            mean_fitness: population.mean_fitness(),
            max_fitness: population.max_fitness(),
            mean_expression: population.mean_expression(),
        };

        let mut individuals = Vec::with_capacity(population.size());
        let mut genes = Vec::new();
        for (index, ind) in population.individuals().iter().enumerate() {
            individuals.push(IndividualRecord {
                generation,
                individual: index,
                fitness: ind.fitness(),
                mean_expression: ind.mean_expression(),
            });
            for (gene_index, gene) in ind.genes().iter().enumerate() {
                genes.push(GeneRecord {
                    generation,
                    individual: index,
                    gene: gene_index,
                    expression: gene.level(),
                });
            }
        }

        Self {
            generation,
            model,
            individuals,
            genes,
        }
    }
}
