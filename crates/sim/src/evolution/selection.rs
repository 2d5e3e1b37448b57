//! Selection (fitness) models.
//!
//! A selection model maps an individual's expression vector to a fitness
//! scalar. It reads expression, never writes it; the engine stores the result
//! on the individual during the selection phase.
//!
//! ## Variants
//!
//! - **Proportional**: fitness is the mean expression level. The simplest
//!   directional selection: more product, more fitness.
//! - **Threshold**: a viability cutoff on mean expression. Individuals at or
//!   above the threshold are fully fit, the rest are not (the boundary is
//!   inclusive).
//! - **Epistatic**: pairwise gene interactions contribute a bonus on top of
//!   the mean-expression base term, weighted by an interaction matrix.
//! - **MultiObjective**: a weighted sum over per-gene expression, one weight
//!   per objective.

pub use crate::errors::SelectionError;
use crate::genome::Individual;
use serde::{Deserialize, Serialize};

/// Fitness equals mean expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProportionalSelection;

impl ProportionalSelection {
    /// Create a proportional selection model.
    pub fn new() -> Self {
        Self
    }
}

/// Viability cutoff on mean expression.
///
/// Fitness is 1.0 when `mean_expression >= threshold` and 0.0 otherwise.
/// The boundary is inclusive: an individual exactly at the threshold passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSelection {
    threshold: f64,
}

impl ThresholdSelection {
    /// Fitness assigned at or above the threshold.
    pub const PASS_FITNESS: f64 = 1.0;
    /// Fitness assigned below the threshold.
    pub const FAIL_FITNESS: f64 = 0.0;

    /// Create a threshold selection model.
    ///
    /// # Errors
    /// Returns an error if `threshold` is NaN or infinite.
    pub fn new(threshold: f64) -> Result<Self, SelectionError> {
        if !threshold.is_finite() {
            return Err(SelectionError::InvalidParameter(format!(
                "threshold must be finite, got {threshold}"
            )));
        }
        Ok(Self { threshold })
    }

    /// The cutoff value.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Pairwise epistatic interactions over gene pairs.
///
/// Fitness is `mean_expression + bonus / n`, where
/// `bonus = sum over (i, j) of matrix[i][j] * e_i * e_j` and `n` is the gene
/// count. The bonus is divided by gene count for every matrix size, including
/// the 1x1 case, so the normalization rule is uniform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpistaticSelection {
    matrix: Vec<Vec<f64>>,
}

impl EpistaticSelection {
    /// Create an epistatic selection model from a square interaction matrix.
    ///
    /// `matrix[i][j]` weights the product of the expression levels of genes
    /// `i` and `j`.
    ///
    /// # Errors
    /// Returns an error if the matrix is empty, ragged, non-square, or
    /// contains non-finite entries.
    pub fn new(matrix: Vec<Vec<f64>>) -> Result<Self, SelectionError> {
        let rows = matrix.len();
        if rows == 0 {
            return Err(SelectionError::InvalidParameter(
                "interaction matrix must not be empty".into(),
            ));
        }
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != rows {
                return Err(SelectionError::NonSquareMatrix {
                    rows,
                    row: i,
                    len: row.len(),
                });
            }
            for &value in row {
                if !value.is_finite() {
                    return Err(SelectionError::InvalidParameter(format!(
                        "interaction matrix entry ({i}) must be finite, got {value}"
                    )));
                }
            }
        }
        Ok(Self { matrix })
    }

    /// Matrix dimension (the gene count this model is sized for).
    pub fn dimension(&self) -> usize {
        self.matrix.len()
    }

    /// The interaction matrix.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }
}

/// Weighted sum over per-gene expression levels.
///
/// The weight count must equal the gene count; a mismatch fails at
/// evaluation time so the model can be constructed before the population
/// shape is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiObjectiveSelection {
    weights: Vec<f64>,
}

impl MultiObjectiveSelection {
    /// Create a multi-objective selection model from per-gene weights.
    ///
    /// # Errors
    /// Returns an error if `weights` is empty or contains non-finite values.
    pub fn new(weights: Vec<f64>) -> Result<Self, SelectionError> {
        if weights.is_empty() {
            return Err(SelectionError::InvalidParameter(
                "objective weights must not be empty".into(),
            ));
        }
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(SelectionError::InvalidParameter(format!(
                    "objective weight {i} must be finite, got {w}"
                )));
            }
        }
        Ok(Self { weights })
    }

    /// Number of objectives (one per gene).
    pub fn objective_count(&self) -> usize {
        self.weights.len()
    }

    /// The objective weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// The selection model family, dispatched by variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionModel {
    /// Fitness = mean expression
    Proportional(ProportionalSelection),
    /// Viability cutoff on mean expression
    Threshold(ThresholdSelection),
    /// Pairwise interaction bonus on top of mean expression
    Epistatic(EpistaticSelection),
    /// Weighted per-gene objectives
    MultiObjective(MultiObjectiveSelection),
}

impl SelectionModel {
    /// Compute the fitness of one individual.
    ///
    /// Never mutates gene expression. The engine evaluates this across the
    /// whole population in parallel during the selection phase.
    pub fn fitness_of(&self, individual: &Individual) -> Result<f64, SelectionError> {
        match self {
            Self::Proportional(_) => Ok(individual.mean_expression()),
            Self::Threshold(m) => {
                if individual.mean_expression() >= m.threshold {
                    Ok(ThresholdSelection::PASS_FITNESS)
                } else {
                    Ok(ThresholdSelection::FAIL_FITNESS)
                }
            }
            Self::Epistatic(m) => {
                let n = individual.gene_count();
                if m.dimension() != n {
                    return Err(SelectionError::ObjectiveCountMismatch {
                        objectives: m.dimension(),
                        genes: n,
                    });
                }
                let genes = individual.genes();
                let mut bonus = 0.0;
                for (i, row) in m.matrix.iter().enumerate() {
                    let e_i = genes[i].level();
                    if e_i == 0.0 {
                        continue;
                    }
                    for (j, &weight) in row.iter().enumerate() {
                        bonus += weight * e_i * genes[j].level();
                    }
                }
                Ok(individual.mean_expression() + bonus / n as f64)
            }
            Self::MultiObjective(m) => {
                let n = individual.gene_count();
                if m.weights.len() != n {
                    return Err(SelectionError::ObjectiveCountMismatch {
                        objectives: m.weights.len(),
                        genes: n,
                    });
                }
                Ok(m.weights
                    .iter()
                    .zip(individual.genes())
                    .map(|(w, gene)| w * gene.level())
                    .sum())
            }
        }
    }

    /// Human-readable variant name, used in error reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Proportional(_) => "proportional selection",
            Self::Threshold(_) => "threshold selection",
            Self::Epistatic(_) => "epistatic selection",
            Self::MultiObjective(_) => "multi-objective selection",
        }
    }
}

impl From<ProportionalSelection> for SelectionModel {
    fn from(m: ProportionalSelection) -> Self {
        Self::Proportional(m)
    }
}

impl From<ThresholdSelection> for SelectionModel {
    fn from(m: ThresholdSelection) -> Self {
        Self::Threshold(m)
    }
}

impl From<EpistaticSelection> for SelectionModel {
    fn from(m: EpistaticSelection) -> Self {
        Self::Epistatic(m)
    }
}

impl From<MultiObjectiveSelection> for SelectionModel {
    fn from(m: MultiObjectiveSelection) -> Self {
        Self::MultiObjective(m)
    }
}
