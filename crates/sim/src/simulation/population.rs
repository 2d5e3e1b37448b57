//! Population management and operations.
//!
//! A population is an ordered collection of individuals with a fixed
//! cardinality for the lifetime of a simulation (this core has no birth or
//! death). It also carries the generation counter, which the engine advances
//! exactly once per step.

use crate::errors::SelectionError;
use crate::evolution::SelectionModel;
use crate::genome::Individual;
use rayon::prelude::*;

/// A population of individuals.
#[derive(Debug, Clone)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
    /// Generation counter
    generation: usize,
}

impl Population {
    /// Create a new population from individuals.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create a population of `size` individuals, each with `gene_count`
    /// genes at a uniform initial expression level.
    pub fn uniform(size: usize, gene_count: usize, level: f64) -> Self {
        Self::new(vec![Individual::uniform(gene_count, level); size])
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter.
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get all individuals as a slice.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Get mutable access to individuals.
    pub fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    /// Get a specific individual by index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Get a mutable reference to a specific individual.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Individual> {
        self.individuals.get_mut(index)
    }

    /// Compute fitness values for all individuals without storing them.
    pub fn compute_fitness(
        &self,
        model: &SelectionModel,
    ) -> Result<Vec<f64>, SelectionError> {
        self.individuals
            .par_iter()
            .map(|ind| model.fitness_of(ind))
            .collect()
    }

    /// Compute and store fitness values for all individuals.
    pub fn update_fitness(&mut self, model: &SelectionModel) -> Result<(), SelectionError> {
        let fitness_values = self.compute_fitness(model)?;
        for (ind, fitness) in self.individuals.iter_mut().zip(fitness_values) {
            ind.set_fitness(fitness);
        }
        Ok(())
    }

    /// Mean fitness across the population; 0.0 for an empty population.
    pub fn mean_fitness(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let total: f64 = self.individuals.iter().map(Individual::fitness).sum();
        total / self.individuals.len() as f64
    }

    /// Maximum fitness across the population; 0.0 for an empty population.
    pub fn max_fitness(&self) -> f64 {
        self.individuals
            .iter()
            .map(Individual::fitness)
            .fold(0.0, f64::max)
    }

    /// Mean of per-individual mean expression; 0.0 for an empty population.
    pub fn mean_expression(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .individuals
            .iter()
            .map(Individual::mean_expression)
            .sum();
        total / self.individuals.len() as f64
    }
}
