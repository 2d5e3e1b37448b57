//! Temporal summaries of recorded runs.

use exprevo_sim::storage::GenerationRecord;
use serde::{Deserialize, Serialize};

/// Mean and spread of a per-individual quantity at one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPoint {
    pub generation: usize,
    pub mean: f64,
    pub std_dev: f64,
}

/// Per-generation mean and standard deviation of individual fitness.
pub fn fitness_dynamics(records: &[GenerationRecord]) -> Vec<SummaryPoint> {
    records
        .iter()
        .map(|record| summarize(record.generation, record.individuals.iter().map(|i| i.fitness)))
        .collect()
}

/// Per-generation mean and standard deviation of individual mean expression.
pub fn expression_dynamics(records: &[GenerationRecord]) -> Vec<SummaryPoint> {
    records
        .iter()
        .map(|record| {
            summarize(
                record.generation,
                record.individuals.iter().map(|i| i.mean_expression),
            )
        })
        .collect()
}

fn summarize(generation: usize, values: impl Iterator<Item = f64>) -> SummaryPoint {
    let values: Vec<f64> = values.collect();
    if values.is_empty() {
        return SummaryPoint {
            generation,
            mean: 0.0,
            std_dev: 0.0,
        };
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    SummaryPoint {
        generation,
        mean,
        std_dev: variance.sqrt(),
    }
}
