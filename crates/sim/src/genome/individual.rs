use crate::genome::Gene;
use serde::{Deserialize, Serialize};

/// An individual organism: an ordered, fixed-length set of genes plus a
/// fitness scalar.
///
/// The gene count is fixed at construction and uniform across a population
/// for the lifetime of a run. Fitness defaults to 1.0 (neutral) and is
/// overwritten by the selection phase each generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// The genes, in a fixed order
    genes: Vec<Gene>,
    /// Fitness assigned by the most recent selection phase
    fitness: f64,
}

impl Individual {
    /// Neutral fitness assigned before the first selection phase.
    pub const DEFAULT_FITNESS: f64 = 1.0;

    /// Create an individual from a gene vector.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            fitness: Self::DEFAULT_FITNESS,
        }
    }

    /// Create an individual with `gene_count` genes all at the same level.
    pub fn uniform(gene_count: usize, level: f64) -> Self {
        Self::new(vec![Gene::new(level); gene_count])
    }

    /// Number of genes.
    #[inline]
    pub fn gene_count(&self) -> usize {
        self.genes.len()
    }

    /// Borrow the genes (read-only).
    #[inline]
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Borrow the genes mutably for in-place modification.
    #[inline]
    pub fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    /// Current fitness.
    #[inline]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Overwrite the fitness value.
    #[inline]
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Arithmetic mean of the gene expression levels.
    ///
    /// Defined as 0.0 for an individual with no genes; never divides by zero.
    pub fn mean_expression(&self) -> f64 {
        if self.genes.is_empty() {
            return 0.0;
        }
        let total: f64 = self.genes.iter().map(Gene::level).sum();
        total / self.genes.len() as f64
    }

    /// The expression levels as a plain vector, in gene order.
    pub fn expression_levels(&self) -> Vec<f64> {
        self.genes.iter().map(Gene::level).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_individual(levels: &[f64]) -> Individual {
        Individual::new(levels.iter().map(|&l| Gene::new(l)).collect())
    }

    // ===== Construction Tests =====

    #[test]
    fn test_individual_new() {
        let ind = test_individual(&[1.0, 2.0, 3.0]);
        assert_eq!(ind.gene_count(), 3);
        assert_eq!(ind.fitness(), 1.0);
    }

    #[test]
    fn test_individual_uniform() {
        let ind = Individual::uniform(5, 0.5);
        assert_eq!(ind.gene_count(), 5);
        for gene in ind.genes() {
            assert_eq!(gene.level(), 0.5);
        }
    }

    #[test]
    fn test_individual_uniform_clamps_negative_level() {
        let ind = Individual::uniform(3, -1.0);
        for gene in ind.genes() {
            assert_eq!(gene.level(), 0.0);
        }
    }

    // ===== Mean Expression Tests =====

    #[test]
    fn test_mean_expression() {
        let ind = test_individual(&[1.0, 2.0, 3.0]);
        assert!((ind.mean_expression() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_expression_empty_is_zero() {
        let ind = Individual::new(Vec::new());
        assert_eq!(ind.mean_expression(), 0.0);
    }

    #[test]
    fn test_mean_expression_single_gene() {
        let ind = test_individual(&[0.42]);
        assert_eq!(ind.mean_expression(), 0.42);
    }

    // ===== Fitness Tests =====

    #[test]
    fn test_individual_set_fitness() {
        let mut ind = test_individual(&[1.0]);
        ind.set_fitness(0.25);
        assert_eq!(ind.fitness(), 0.25);
    }

    #[test]
    fn test_individual_clone_is_independent() {
        let ind1 = test_individual(&[1.0, 1.0]);
        let mut ind2 = ind1.clone();

        ind2.set_fitness(0.5);
        ind2.genes_mut()[0].set_level(9.0);

        assert_eq!(ind1.fitness(), 1.0);
        assert_eq!(ind1.genes()[0].level(), 1.0);
        assert_eq!(ind2.genes()[0].level(), 9.0);
    }

    #[test]
    fn test_expression_levels() {
        let ind = test_individual(&[0.1, 0.2, 0.3]);
        assert_eq!(ind.expression_levels(), vec![0.1, 0.2, 0.3]);
    }
}
