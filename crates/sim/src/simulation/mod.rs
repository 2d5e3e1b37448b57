//! Simulation orchestration: population state, configuration, and the
//! generation-step engine.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod population;

pub use builder::SimulationBuilder;
pub use configs::{Configuration, EvolutionConfig, ExecutionConfig, InitializationConfig};
pub use engine::Simulation;
pub use population::Population;
