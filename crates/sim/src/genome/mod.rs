//! Genome representation: genes and the individuals that carry them.

pub mod gene;
pub mod individual;

pub use gene::Gene;
pub use individual::Individual;
