//! Simulation engine for the generation-step pipeline.
//!
//! The engine owns the population, the seeded random generator, and the
//! pluggable models, and advances the simulation one generation at a time
//! through four fixed phases:
//!
//! 1. **Expression** — evaluate the expression model for every gene of every
//!    individual, routing per-gene TF inputs through the regulatory network
//!    when one is configured.
//! 2. **Selection** — compute and store a fitness value per individual.
//! 3. **Mutation** — stochastically perturb every individual's genes.
//! 4. **Update** — advance the generation counter.
//!
//! Phases execute strictly in this order; each consumes the previous one's
//! output. Within a phase, work is data-parallel across individuals, with
//! randomness arranged so that parallel execution reproduces the sequential
//! draw order exactly (see `apply_mutation`).

use crate::base::Conditions;
use crate::errors::{ConfigError, SimulationError};
use crate::simulation::{Configuration, Population};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Current population
    population: Population,
    /// Full configuration, kept for reproducibility and inspection
    config: Configuration,
    /// Cooperative cancellation flag checked between steps
    running: Arc<AtomicBool>,
    /// Random number generator (Xoshiro256++ for speed and quality)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a new simulation from a configuration.
    ///
    /// All structural validation happens here: an invalid population size,
    /// gene count, or a model sized for the wrong gene count fails
    /// immediately, never later inside `step()`.
    pub fn new(config: Configuration) -> Result<Self, ConfigError> {
        let population_size = config.execution.population_size;
        if population_size == 0 {
            return Err(ConfigError::InvalidParameter(
                "population size must be greater than 0".into(),
            ));
        }

        let genes = config.initialization.genes_per_individual;
        if genes == 0 {
            return Err(ConfigError::InvalidParameter(
                "genes per individual must be greater than 0".into(),
            ));
        }

        let initial_level = config.initialization.initial_level;
        if !initial_level.is_finite() || initial_level < 0.0 {
            return Err(ConfigError::InvalidParameter(format!(
                "initial expression level must be finite and >= 0, got {initial_level}"
            )));
        }

        // Models carrying a gene-count shape must match the simulation's.
        use crate::evolution::SelectionModel;
        match &config.evolution.selection {
            SelectionModel::Epistatic(m) if m.dimension() != genes => {
                return Err(ConfigError::GeneCountMismatch {
                    model: "Interaction matrix",
                    expected: genes,
                    found: m.dimension(),
                });
            }
            SelectionModel::MultiObjective(m) if m.objective_count() != genes => {
                return Err(ConfigError::GeneCountMismatch {
                    model: "Objective weights",
                    expected: genes,
                    found: m.objective_count(),
                });
            }
            _ => {}
        }

        if let Some(network) = &config.evolution.regulation {
            if network.gene_count() != genes {
                return Err(ConfigError::GeneCountMismatch {
                    model: "Regulatory network",
                    expected: genes,
                    found: network.gene_count(),
                });
            }
        }

        let rng = match config.execution.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };

        let population = Population::uniform(population_size, genes, initial_level);

        Ok(Self {
            population,
            config,
            running: Arc::new(AtomicBool::new(true)),
            rng,
        })
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// Get the full configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Get the shared environmental snapshot.
    pub fn conditions(&self) -> &Conditions {
        &self.config.conditions
    }

    /// Genes per individual for this run.
    pub fn genes_per_individual(&self) -> usize {
        self.config.initialization.genes_per_individual
    }

    /// Whether the run loop will keep stepping.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Request cooperative cancellation; `run` stops before its next step.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// Clear a previous stop request.
    pub fn resume(&self) {
        self.running.store(true, Ordering::Relaxed);
    }

    /// A handle that can stop the run loop from another thread.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Expression phase: write fresh expression levels into every gene.
    fn apply_expression(&mut self) -> Result<(), SimulationError> {
        let expression = &self.config.evolution.expression;
        let conditions = &self.config.conditions;
        let base_tf = conditions.tf_concentration();

        match self.config.evolution.regulation.as_ref() {
            Some(network) => {
                self.population
                    .individuals_mut()
                    .par_iter_mut()
                    .try_for_each(|ind| {
                        let levels = ind.expression_levels();
                        let mut inputs = Vec::new();
                        network.tf_inputs(&levels, &mut inputs);
                        for (gene, &input) in ind.genes_mut().iter_mut().zip(inputs.iter()) {
                            // Repressive edges can drive the raw sum below
                            // zero; concentrations are floored before the
                            // model sees them.
                            let tf = (base_tf + input).max(0.0);
                            gene.set_level(expression.compute_at(tf)?);
                        }
                        Ok::<(), SimulationError>(())
                    })?;
            }
            None => {
                // Without regulation every gene sees the same snapshot, and
                // the model is pure, so one evaluation covers them all.
                let value = expression.compute(conditions)?;
                self.population
                    .individuals_mut()
                    .par_iter_mut()
                    .for_each(|ind| {
                        for gene in ind.genes_mut() {
                            gene.set_level(value);
                        }
                    });
            }
        }
        Ok(())
    }

    /// Selection phase: compute and store fitness for every individual.
    fn apply_selection(&mut self) -> Result<(), SimulationError> {
        self.population
            .update_fitness(&self.config.evolution.selection)?;
        Ok(())
    }

    /// Mutation phase: perturb every individual's genes.
    ///
    /// Child seeds are drawn from the master generator sequentially in
    /// individual-major order before the parallel region, so the master RNG
    /// is consumed identically whatever the thread schedule. Each individual
    /// then mutates under its own generator.
    fn apply_mutation(&mut self) {
        let seeds: Vec<u64> = (0..self.population.size())
            .map(|_| self.rng.random())
            .collect();

        let mutation = &self.config.evolution.mutation;
        self.population
            .individuals_mut()
            .par_iter_mut()
            .zip(seeds.par_iter())
            .for_each(|(ind, &seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                mutation.mutate(ind, &mut local_rng);
            });
    }

    /// Advance the simulation by one generation.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        // 1. Expression phase
        self.apply_expression()?;

        // 2. Selection phase
        self.apply_selection()?;

        // 3. Mutation phase
        self.apply_mutation();

        // 4. Update phase
        self.population.increment_generation();

        Ok(())
    }

    /// Run for the configured number of generations.
    ///
    /// Returns the number of generations actually executed, which is lower
    /// than requested if the running flag was cleared mid-run.
    pub fn run(&mut self) -> Result<usize, SimulationError> {
        self.run_for(self.config.execution.total_generations)
    }

    /// Run for up to `generations` generations, honoring the running flag.
    ///
    /// The flag is checked before each step; cancellation is cooperative and
    /// never interrupts a step in progress.
    pub fn run_for(&mut self, generations: usize) -> Result<usize, SimulationError> {
        let mut executed = 0;
        for _ in 0..generations {
            if !self.running.load(Ordering::Relaxed) {
                break;
            }
            self.step()?;
            executed += 1;
        }
        Ok(executed)
    }
}
