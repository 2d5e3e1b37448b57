//! Batch and sensitivity analysis tools for exprevo.
//!
//! This module provides:
//! - Parameter sweeps over sampled configurations (`batch`)
//! - First-order global sensitivity indices (`sensitivity`)
//! - Temporal summaries of recorded runs (`temporal`)

pub mod batch;
pub mod sensitivity;
pub mod temporal;

pub use batch::{BatchConfig, BatchError, BatchOutcome, BatchRunner, ParameterSpec};
pub use sensitivity::{first_order_indices, SensitivityIndex};
pub use temporal::{expression_dynamics, fitness_dynamics, SummaryPoint};
