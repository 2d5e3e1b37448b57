//! Data collection: per-generation records and the bounded recorder.

pub mod recorder;
pub mod types;

pub use recorder::{RecordTier, Recorder};
pub use types::{
    GeneRecord, GenerationRecord, IndividualRecord, ModelRecord, RecordingStrategy,
};
