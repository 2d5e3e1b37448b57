//! Evolutionary operators: expression response, selection, mutation, and the
//! regulatory feedback network.

pub mod expression;
pub mod mutation;
pub mod regulation;
pub mod selection;

pub use expression::{
    ConstantExpression, ExpressionModel, LinearExpression, SigmoidalExpression,
};
pub use mutation::{MutationModel, PointMutation};
pub use regulation::{RegulatoryEdge, RegulatoryNetwork};
pub use selection::{
    EpistaticSelection, MultiObjectiveSelection, ProportionalSelection, SelectionModel,
    ThresholdSelection,
};
