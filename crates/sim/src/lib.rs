//! # Simulation Crate
//!
//! The `sim` crate provides the core logic for simulating the evolution of
//! gene expression. It includes modules for the genome representation (genes
//! and individuals), the evolutionary operators (expression, selection,
//! mutation, and the regulatory network), the generation-step engine, and
//! the per-generation data recorder.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;
pub mod storage;

pub use base::{Conditions, ExpressionLevel};
pub use genome::{Gene, Individual};
