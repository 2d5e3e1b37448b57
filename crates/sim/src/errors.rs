use std::error;
use std::fmt;

/// Errors raised when constructing an expression model with invalid parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionError {
    /// A parameter that must be non-negative was negative.
    NegativeParameter(&'static str, f64),
    /// A parameter that must be strictly positive was zero or negative.
    NonPositiveParameter(&'static str, f64),
    /// A parameter was NaN or infinite.
    NonFiniteParameter(&'static str, f64),
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeParameter(name, val) => {
                write!(f, "Expression parameter {name} must be >= 0, got {val}")
            }
            Self::NonPositiveParameter(name, val) => {
                write!(f, "Expression parameter {name} must be > 0, got {val}")
            }
            Self::NonFiniteParameter(name, val) => {
                write!(f, "Expression parameter {name} must be finite, got {val}")
            }
        }
    }
}

impl error::Error for ExpressionError {}

/// Errors that can occur when constructing or evaluating a selection model.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// Invalid parameter value
    InvalidParameter(String),
    /// The epistatic interaction matrix is not square.
    NonSquareMatrix { rows: usize, row: usize, len: usize },
    /// The multi-objective weight count does not match the gene count.
    ObjectiveCountMismatch { objectives: usize, genes: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => {
                write!(f, "Invalid selection parameter: {msg}")
            }
            Self::NonSquareMatrix { rows, row, len } => {
                write!(
                    f,
                    "Interaction matrix must be square: {rows} rows but row {row} has {len} columns"
                )
            }
            Self::ObjectiveCountMismatch { objectives, genes } => {
                write!(
                    f,
                    "Objective count {objectives} does not match gene count {genes}"
                )
            }
        }
    }
}

impl error::Error for SelectionError {}

/// Errors that can occur when constructing a mutation model.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationError {
    /// Invalid mutation rate (must be between 0.0 and 1.0)
    InvalidMutationRate(f64),
    /// Invalid noise scale (must be finite and >= 0)
    InvalidNoiseScale(f64),
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationError::InvalidMutationRate(rate) => {
                write!(
                    f,
                    "Invalid mutation rate: {rate} (must be between 0.0 and 1.0)"
                )
            }
            MutationError::InvalidNoiseScale(scale) => {
                write!(
                    f,
                    "Invalid mutation noise scale: {scale} (must be finite and >= 0)"
                )
            }
        }
    }
}

impl error::Error for MutationError {}

/// Errors that can occur when constructing a regulatory network.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// An edge endpoint refers to a gene position outside the network.
    EdgeOutOfBounds {
        source: usize,
        target: usize,
        genes: usize,
    },
    /// An edge weight was NaN or infinite.
    NonFiniteWeight { source: usize, target: usize },
    /// Invalid edge density for random construction (must be in [0, 1]).
    InvalidDensity(f64),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeOutOfBounds {
                source,
                target,
                genes,
            } => {
                write!(
                    f,
                    "Regulatory edge {source} -> {target} is out of bounds for {genes} genes"
                )
            }
            Self::NonFiniteWeight { source, target } => {
                write!(
                    f,
                    "Regulatory edge {source} -> {target} has a non-finite weight"
                )
            }
            Self::InvalidDensity(d) => {
                write!(f, "Invalid edge density: {d} (must be between 0.0 and 1.0)")
            }
        }
    }
}

impl error::Error for NetworkError {}

/// Errors raised when a simulation is constructed with an invalid configuration.
///
/// Configuration problems fail here, at construction time, never later inside
/// `step()`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An invalid parameter value was provided
    InvalidParameter(String),
    /// A model is sized for a different gene count than the simulation.
    GeneCountMismatch {
        model: &'static str,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => {
                write!(f, "Invalid configuration: {msg}")
            }
            Self::GeneCountMismatch {
                model,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{model} is sized for {found} genes but the simulation has {expected}"
                )
            }
        }
    }
}

impl error::Error for ConfigError {}

/// Errors that can occur during simulation building.
#[derive(Debug)]
pub enum BuilderError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// An invalid parameter value was provided
    InvalidParameter(String),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(param) => {
                write!(f, "Missing required parameter: {param}")
            }
            Self::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {msg}")
            }
        }
    }
}

impl error::Error for BuilderError {}

impl From<ConfigError> for BuilderError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidParameter(e.to_string())
    }
}

/// An unexpected numeric state reached during a phase computation.
///
/// Expression values are allowed to clamp to zero; everything else that goes
/// non-finite is surfaced through this type instead of being absorbed.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationError {
    /// Name of the model that produced the value
    pub model: &'static str,
    /// The offending value
    pub value: f64,
}

impl fmt::Display for ComputationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} model produced a non-finite value: {}",
            self.model, self.value
        )
    }
}

impl error::Error for ComputationError {}

/// Errors surfaced by `Simulation::step`.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A model produced a numerically invalid result.
    Computation(ComputationError),
    /// The selection model rejected an individual.
    Selection(SelectionError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Computation(e) => write!(f, "Computation error: {e}"),
            Self::Selection(e) => write!(f, "Selection error: {e}"),
        }
    }
}

impl error::Error for SimulationError {}

impl From<ComputationError> for SimulationError {
    fn from(e: ComputationError) -> Self {
        Self::Computation(e)
    }
}

impl From<SelectionError> for SimulationError {
    fn from(e: SelectionError) -> Self {
        Self::Selection(e)
    }
}
