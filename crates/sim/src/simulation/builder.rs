//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and comprehensive validation.

use crate::base::Conditions;
pub use crate::errors::BuilderError;
use crate::evolution::{
    ConstantExpression, ExpressionModel, MutationModel, PointMutation, ProportionalSelection,
    RegulatoryNetwork, SelectionModel,
};
use crate::simulation::{
    Configuration, EvolutionConfig, ExecutionConfig, InitializationConfig, Simulation,
};

/// Builder for constructing [`Simulation`] instances with a fluent API.
///
/// Defaults: constant expression at level 1.0, proportional selection, no
/// mutation, no regulation, baseline conditions, one generation, genes
/// initialized at level 0.0.
///
/// # Examples
///
/// ```
/// use exprevo_sim::simulation::SimulationBuilder;
///
/// let sim = SimulationBuilder::new()
///     .population_size(50)
///     .genes_per_individual(10)
///     .generations(100)
///     .mutation_rate(0.1, 0.05)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    // Required parameters
    population_size: Option<usize>,
    genes_per_individual: Option<usize>,

    // Optional parameters with defaults
    generations: usize,
    initial_level: f64,
    expression: ExpressionModel,
    selection: SelectionModel,
    mutation: Option<MutationModel>,
    // Raw convenience parameters, validated in build()
    mutation_rate: Option<(f64, f64)>,
    regulation: Option<RegulatoryNetwork>,
    conditions: Conditions,
    seed: Option<u64>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self {
            population_size: None,
            genes_per_individual: None,
            generations: 1,
            initial_level: 0.0,
            expression: ExpressionModel::Constant(
                ConstantExpression::new(1.0).expect("default level is valid"),
            ),
            selection: ProportionalSelection::new().into(),
            mutation: None,
            mutation_rate: None,
            regulation: None,
            conditions: Conditions::new(),
            seed: None,
        }
    }

    /// Set the population size (required).
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the number of genes per individual (required).
    pub fn genes_per_individual(mut self, genes: usize) -> Self {
        self.genes_per_individual = Some(genes);
        self
    }

    /// Set the number of generations to run (default: 1).
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Set the initial expression level for every gene (default: 0.0).
    pub fn initial_level(mut self, level: f64) -> Self {
        self.initial_level = level;
        self
    }

    /// Set the expression model (default: constant at 1.0).
    pub fn expression(mut self, model: impl Into<ExpressionModel>) -> Self {
        self.expression = model.into();
        self
    }

    /// Set the selection model (default: proportional).
    pub fn selection(mut self, model: impl Into<SelectionModel>) -> Self {
        self.selection = model.into();
        self
    }

    /// Set the mutation model (default: disabled).
    pub fn mutation(mut self, model: impl Into<MutationModel>) -> Self {
        self.mutation = Some(model.into());
        self
    }

    /// Convenience: point mutation with the given rate and noise scale.
    ///
    /// Values are validated in `build()`.
    pub fn mutation_rate(mut self, rate: f64, noise_scale: f64) -> Self {
        self.mutation_rate = Some((rate, noise_scale));
        self
    }

    /// Set the regulatory network (default: none).
    pub fn regulation(mut self, network: RegulatoryNetwork) -> Self {
        self.regulation = Some(network);
        self
    }

    /// Set the environmental conditions (default: baseline).
    pub fn conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// Set the RNG seed (default: seeded from entropy).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the simulation, validating the full configuration.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let population_size = self
            .population_size
            .ok_or(BuilderError::MissingRequired("population_size"))?;
        let genes_per_individual = self
            .genes_per_individual
            .ok_or(BuilderError::MissingRequired("genes_per_individual"))?;

        let mutation = match (self.mutation, self.mutation_rate) {
            (Some(model), None) => model,
            (None, Some((rate, noise_scale))) => PointMutation::new(rate, noise_scale)
                .map_err(|e| BuilderError::InvalidParameter(e.to_string()))?
                .into(),
            (None, None) => PointMutation::disabled().into(),
            (Some(_), Some(_)) => {
                return Err(BuilderError::InvalidParameter(
                    "set either a mutation model or a mutation rate, not both".into(),
                ));
            }
        };

        let config = Configuration {
            execution: ExecutionConfig::new(population_size, self.generations, self.seed),
            initialization: InitializationConfig::new(genes_per_individual, self.initial_level),
            evolution: EvolutionConfig {
                expression: self.expression,
                selection: self.selection,
                mutation,
                regulation: self.regulation,
            },
            conditions: self.conditions,
        };

        Ok(Simulation::new(config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::{LinearExpression, ThresholdSelection};

    #[test]
    fn test_builder_minimal() {
        let sim = SimulationBuilder::new()
            .population_size(5)
            .genes_per_individual(3)
            .build()
            .unwrap();

        assert_eq!(sim.population().size(), 5);
        assert_eq!(sim.genes_per_individual(), 3);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_builder_missing_population_size() {
        let err = SimulationBuilder::new()
            .genes_per_individual(3)
            .build()
            .unwrap_err();
        assert!(format!("{err}").contains("population_size"));
    }

    #[test]
    fn test_builder_missing_genes() {
        let err = SimulationBuilder::new()
            .population_size(5)
            .build()
            .unwrap_err();
        assert!(format!("{err}").contains("genes_per_individual"));
    }

    #[test]
    fn test_builder_full_configuration() {
        let sim = SimulationBuilder::new()
            .population_size(20)
            .genes_per_individual(4)
            .generations(50)
            .initial_level(0.5)
            .expression(LinearExpression::new(1.0, 0.2).unwrap())
            .selection(ThresholdSelection::new(0.3).unwrap())
            .mutation_rate(0.2, 0.1)
            .conditions(Conditions::new().with_tf_concentration(0.7))
            .seed(7)
            .build()
            .unwrap();

        assert_eq!(sim.configuration().execution.total_generations, 50);
        assert_eq!(sim.conditions().tf_concentration(), 0.7);
    }

    #[test]
    fn test_builder_invalid_mutation_rate() {
        let err = SimulationBuilder::new()
            .population_size(5)
            .genes_per_individual(3)
            .mutation_rate(1.5, 0.1)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuilderError::InvalidParameter(_)));
    }

    #[test]
    fn test_builder_rejects_both_mutation_forms() {
        let err = SimulationBuilder::new()
            .population_size(5)
            .genes_per_individual(3)
            .mutation(PointMutation::disabled())
            .mutation_rate(0.1, 0.1)
            .build()
            .unwrap_err();
        assert!(format!("{err}").contains("not both"));
    }

    #[test]
    fn test_builder_propagates_config_errors() {
        let err = SimulationBuilder::new()
            .population_size(0)
            .genes_per_individual(3)
            .build()
            .unwrap_err();
        assert!(format!("{err}").contains("population size"));
    }

    #[test]
    fn test_builder_rejects_mismatched_regulation() {
        let err = SimulationBuilder::new()
            .population_size(5)
            .genes_per_individual(3)
            .regulation(RegulatoryNetwork::empty(8))
            .build()
            .unwrap_err();
        assert!(format!("{err}").contains("Regulatory network"));
    }
}
