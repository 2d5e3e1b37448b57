//! # Analysis Crate
//!
//! Batch execution and global sensitivity analysis for exprevo simulations.
//! A batch samples parameter combinations, runs one independently seeded
//! simulation per sample, and aggregates the outcomes into per-parameter
//! sensitivity indices and temporal summaries.

pub mod analysis;

pub use analysis::batch::{BatchConfig, BatchError, BatchOutcome, BatchRunner, ParameterSpec};
pub use analysis::sensitivity::{first_order_indices, SensitivityIndex};
pub use analysis::temporal::{expression_dynamics, fitness_dynamics, SummaryPoint};
