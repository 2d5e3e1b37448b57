//! In-memory generation recorder with bounded retention.
//!
//! The recorder is an external collaborator of the engine: it reads the
//! population through the public accessor once per generation and keeps
//! three-tier tabular records (model, individual, gene). Retention is the
//! recorder's own concern — when a cap is configured, the oldest generations
//! are dropped as new ones arrive; the engine itself never retains history.

use crate::simulation::Population;
use crate::storage::types::{GenerationRecord, RecordingStrategy};
use std::collections::VecDeque;
use std::fmt::Write as _;

/// Which record tier to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordTier {
    /// One row per recorded generation
    Model,
    /// One row per individual per recorded generation
    Individual,
    /// One row per gene per individual per recorded generation
    Gene,
}

/// Collects per-generation snapshots of a population.
#[derive(Debug, Clone)]
pub struct Recorder {
    strategy: RecordingStrategy,
    /// Maximum number of retained generations; None retains everything
    retention: Option<usize>,
    records: VecDeque<GenerationRecord>,
}

impl Recorder {
    /// Create a recorder with the given strategy and unbounded retention.
    pub fn new(strategy: RecordingStrategy) -> Self {
        Self {
            strategy,
            retention: None,
            records: VecDeque::new(),
        }
    }

    /// Cap retained history at `generations` records, dropping the oldest
    /// once the cap is exceeded.
    pub fn with_retention(mut self, generations: usize) -> Self {
        self.retention = Some(generations);
        self
    }

    /// Record the population's current generation if the strategy selects it.
    ///
    /// Returns true if a record was captured.
    pub fn record(&mut self, population: &Population) -> bool {
        if !self.strategy.should_record(population.generation()) {
            return false;
        }
        self.records.push_back(GenerationRecord::capture(population));
        if let Some(cap) = self.retention {
            while self.records.len() > cap {
                self.records.pop_front();
            }
        }
        true
    }

    /// Number of retained generation records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any records are retained.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The retained records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &GenerationRecord> {
        self.records.iter()
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&GenerationRecord> {
        self.records.back()
    }

    /// Render one record tier as CSV text.
    pub fn to_csv(&self, tier: RecordTier) -> String {
        let mut out = String::new();
        match tier {
            RecordTier::Model => {
                out.push_str(
                    "generation,population_size,mean_fitness,max_fitness,mean_expression\n",
                );
                for record in &self.records {
                    let m = &record.model;
                    let _ = writeln!(
                        out,
                        "{},{},{},{},{}",
                        m.generation,
                        m.population_size,
                        m.mean_fitness,
                        m.max_fitness,
                        m.mean_expression
                    );
                }
            }
            RecordTier::Individual => {
                out.push_str("generation,individual,fitness,mean_expression\n");
                for record in &self.records {
                    for i in &record.individuals {
                        let _ = writeln!(
                            out,
                            "{},{},{},{}",
                            i.generation, i.individual, i.fitness, i.mean_expression
                        );
                    }
                }
            }
            RecordTier::Gene => {
                out.push_str("generation,individual,gene,expression\n");
                for record in &self.records {
                    for g in &record.genes {
                        let _ = writeln!(
                            out,
                            "{},{},{},{}",
                            g.generation, g.individual, g.gene, g.expression
                        );
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::ProportionalSelection;

    fn recorded_population(generation: usize) -> Population {
        let mut pop = Population::uniform(2, 2, 1.0);
        for _ in 0..generation {
            pop.increment_generation();
        }
        pop.update_fitness(&ProportionalSelection::new().into())
            .unwrap();
        pop
    }

    #[test]
    fn test_recorder_records_all() {
        let mut recorder = Recorder::new(RecordingStrategy::All);
        for generation in 0..5 {
            assert!(recorder.record(&recorded_population(generation)));
        }
        assert_eq!(recorder.len(), 5);
        assert_eq!(recorder.latest().unwrap().generation, 4);
    }

    #[test]
    fn test_recorder_strategy_filters() {
        let mut recorder = Recorder::new(RecordingStrategy::EveryN(2));
        for generation in 0..6 {
            recorder.record(&recorded_population(generation));
        }
        let recorded: Vec<usize> = recorder.records().map(|r| r.generation).collect();
        assert_eq!(recorded, vec![0, 2, 4]);
    }

    #[test]
    fn test_recorder_strategy_none() {
        let mut recorder = Recorder::new(RecordingStrategy::None);
        assert!(!recorder.record(&recorded_population(0)));
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_recorder_retention_drops_oldest() {
        let mut recorder = Recorder::new(RecordingStrategy::All).with_retention(3);
        for generation in 0..10 {
            recorder.record(&recorded_population(generation));
        }
        assert_eq!(recorder.len(), 3);
        let recorded: Vec<usize> = recorder.records().map(|r| r.generation).collect();
        assert_eq!(recorded, vec![7, 8, 9]);
    }

    #[test]
    fn test_recorder_csv_model_tier() {
        let mut recorder = Recorder::new(RecordingStrategy::All);
        recorder.record(&recorded_population(0));

        let csv = recorder.to_csv(RecordTier::Model);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "generation,population_size,mean_fitness,max_fitness,mean_expression"
        );
        assert_eq!(lines.next().unwrap(), "0,2,1,1,1");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_recorder_csv_row_counts() {
        let mut recorder = Recorder::new(RecordingStrategy::All);
        recorder.record(&recorded_population(0));
        recorder.record(&recorded_population(1));

        // 2 individuals x 2 generations (+ header)
        let individual_rows = recorder.to_csv(RecordTier::Individual).lines().count();
        assert_eq!(individual_rows, 5);

        // 2 individuals x 2 genes x 2 generations (+ header)
        let gene_rows = recorder.to_csv(RecordTier::Gene).lines().count();
        assert_eq!(gene_rows, 9);
    }
}
