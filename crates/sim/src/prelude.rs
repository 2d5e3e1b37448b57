//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use exprevo_sim::prelude::*;
//!
//! let sim = SimulationBuilder::new()
//!     .population_size(10)
//!     .genes_per_individual(4)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! assert_eq!(sim.generation(), 0);
//! ```

pub use crate::base::{Conditions, ExpressionLevel};
pub use crate::errors;
pub use crate::evolution::{
    ConstantExpression, EpistaticSelection, ExpressionModel, LinearExpression, MultiObjectiveSelection,
    MutationModel, PointMutation, ProportionalSelection, RegulatoryEdge, RegulatoryNetwork,
    SelectionModel, SigmoidalExpression, ThresholdSelection,
};
pub use crate::genome::{Gene, Individual};
pub use crate::simulation::{
    Configuration, EvolutionConfig, ExecutionConfig, InitializationConfig, Population, Simulation,
    SimulationBuilder,
};
pub use crate::storage::{GenerationRecord, RecordTier, Recorder, RecordingStrategy};
