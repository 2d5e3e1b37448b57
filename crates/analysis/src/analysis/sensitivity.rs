//! First-order global sensitivity indices.
//!
//! The index for a parameter is a correlation-ratio estimate: outcomes are
//! binned by the parameter's sampled value and the between-bin variance of
//! the outcome metric is compared to its total variance. A parameter the
//! outcome ignores scores near 0; a parameter that alone determines the
//! outcome scores near 1.

use crate::analysis::batch::{BatchError, BatchOutcome, ParameterSpec};
use serde::{Deserialize, Serialize};

/// First-order sensitivity of the outcome metric to one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityIndex {
    pub name: String,
    /// Fraction of outcome variance attributable to this parameter alone,
    /// in [0, 1]
    pub first_order: f64,
}

/// Compute first-order indices of mean fitness for every swept parameter.
///
/// # Arguments
/// * `specs` - The swept parameters, in the order their values appear in
///   each outcome
/// * `outcomes` - Batch outcomes to analyze
/// * `bins` - Number of value bins per parameter (at least 2)
pub fn first_order_indices(
    specs: &[ParameterSpec],
    outcomes: &[BatchOutcome],
    bins: usize,
) -> Result<Vec<SensitivityIndex>, BatchError> {
    first_order_indices_by(specs, outcomes, bins, |o| o.mean_fitness)
}

/// Compute first-order indices of an arbitrary outcome metric.
pub fn first_order_indices_by(
    specs: &[ParameterSpec],
    outcomes: &[BatchOutcome],
    bins: usize,
    metric: impl Fn(&BatchOutcome) -> f64,
) -> Result<Vec<SensitivityIndex>, BatchError> {
    if bins < 2 {
        return Err(BatchError::InvalidSpec(format!(
            "bin count must be at least 2, got {bins}"
        )));
    }
    if outcomes.is_empty() {
        return Err(BatchError::InvalidSpec(
            "cannot compute indices over zero outcomes".into(),
        ));
    }
    for outcome in outcomes {
        if outcome.values.len() != specs.len() {
            return Err(BatchError::InvalidSpec(format!(
                "outcome carries {} values but {} parameters were swept",
                outcome.values.len(),
                specs.len()
            )));
        }
    }

    let ys: Vec<f64> = outcomes.iter().map(&metric).collect();
    let mean = ys.iter().sum::<f64>() / ys.len() as f64;
    let total_ss: f64 = ys.iter().map(|y| (y - mean) * (y - mean)).sum();

    let indices = specs
        .iter()
        .enumerate()
        .map(|(p, spec)| {
            // A constant output carries no variance to attribute.
            if total_ss <= f64::EPSILON {
                return SensitivityIndex {
                    name: spec.name.clone(),
                    first_order: 0.0,
                };
            }

            let mut bin_sums = vec![0.0; bins];
            let mut bin_counts = vec![0usize; bins];
            let width = spec.high - spec.low;

            for (outcome, &y) in outcomes.iter().zip(ys.iter()) {
                let value = outcome.values[p];
                let bin = if width <= 0.0 {
                    0
                } else {
                    (((value - spec.low) / width * bins as f64) as usize).min(bins - 1)
                };
                bin_sums[bin] += y;
                bin_counts[bin] += 1;
            }

            let between_ss: f64 = bin_sums
                .iter()
                .zip(bin_counts.iter())
                .filter(|(_, &count)| count > 0)
                .map(|(&sum, &count)| {
                    let bin_mean = sum / count as f64;
                    count as f64 * (bin_mean - mean) * (bin_mean - mean)
                })
                .sum();

            SensitivityIndex {
                name: spec.name.clone(),
                first_order: (between_ss / total_ss).clamp(0.0, 1.0),
            }
        })
        .collect();

    Ok(indices)
}
