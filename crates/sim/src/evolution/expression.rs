//! Expression response models.
//!
//! An expression model is a pure function from an environmental snapshot to a
//! non-negative expression level. It captures how strongly a gene responds to
//! the transcription-factor (TF) concentration it sees:
//!
//! - **Constant**: constitutive expression, independent of the environment
//!   (housekeeping genes).
//! - **Linear**: proportional response, with a negative slope modeling
//!   repression.
//! - **Sigmoidal (Hill)**: cooperative binding produces a saturating,
//!   switch-like response; the Hill coefficient controls how sharp the
//!   switch is.
//!
//! Models never go below zero: a raw negative response clamps to 0.0 at the
//! call site. A non-finite response is a [`ComputationError`] rather than a
//! silently absorbed value.

use crate::base::Conditions;
pub use crate::errors::ExpressionError;
use crate::errors::ComputationError;
use serde::{Deserialize, Serialize};

/// Constitutive expression at a fixed level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantExpression {
    level: f64,
}

impl ConstantExpression {
    /// Create a constant model.
    ///
    /// # Errors
    /// Returns an error if `level` is negative or non-finite.
    pub fn new(level: f64) -> Result<Self, ExpressionError> {
        if !level.is_finite() {
            return Err(ExpressionError::NonFiniteParameter("level", level));
        }
        if level < 0.0 {
            return Err(ExpressionError::NegativeParameter("level", level));
        }
        Ok(Self { level })
    }

    /// The fixed expression level.
    pub fn level(&self) -> f64 {
        self.level
    }
}

/// Linear response to TF concentration: `E = slope * tf + intercept`.
///
/// The slope is unrestricted; a negative slope models repression, where
/// rising TF concentration drives expression toward zero. The intercept is
/// the basal expression with no TF present and must be non-negative. Raw
/// values below zero clamp to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearExpression {
    slope: f64,
    intercept: f64,
}

impl LinearExpression {
    /// Create a linear model.
    ///
    /// # Errors
    /// Returns an error if `intercept` is negative, or either parameter is
    /// non-finite.
    pub fn new(slope: f64, intercept: f64) -> Result<Self, ExpressionError> {
        if !slope.is_finite() {
            return Err(ExpressionError::NonFiniteParameter("slope", slope));
        }
        if !intercept.is_finite() {
            return Err(ExpressionError::NonFiniteParameter("intercept", intercept));
        }
        if intercept < 0.0 {
            return Err(ExpressionError::NegativeParameter("intercept", intercept));
        }
        Ok(Self { slope, intercept })
    }

    /// Response slope per unit of TF concentration.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Basal expression at zero TF concentration.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

/// Sigmoidal (Hill-type) response: `E = vmax * C^n / (K^n + C^n)`.
///
/// `K` is the half-saturation constant (the TF concentration at which the
/// response reaches half of `vmax`) and `n` is the Hill coefficient. Large
/// `n` approaches a step function at `C = K`.
///
/// The response is evaluated in the ratio form `vmax / (1 + (K/C)^n)` with
/// the power computed as `exp(n * ln(K/C))`. Exponentiating the normalized
/// ratio keeps the switch-like regime finite: the exponential saturates to
/// `+inf` (response 0) or `0` (response `vmax`) instead of producing
/// `inf/inf` NaN the direct form is prone to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigmoidalExpression {
    vmax: f64,
    k: f64,
    n: f64,
}

impl SigmoidalExpression {
    /// Create a sigmoidal model.
    ///
    /// # Arguments
    /// * `vmax` - Maximal expression level (must be >= 0)
    /// * `k` - Half-saturation TF concentration (must be > 0)
    /// * `n` - Hill coefficient / steepness (must be > 0)
    pub fn new(vmax: f64, k: f64, n: f64) -> Result<Self, ExpressionError> {
        if !vmax.is_finite() {
            return Err(ExpressionError::NonFiniteParameter("vmax", vmax));
        }
        if vmax < 0.0 {
            return Err(ExpressionError::NegativeParameter("vmax", vmax));
        }
        if !k.is_finite() {
            return Err(ExpressionError::NonFiniteParameter("k", k));
        }
        if k <= 0.0 {
            return Err(ExpressionError::NonPositiveParameter("k", k));
        }
        if !n.is_finite() {
            return Err(ExpressionError::NonFiniteParameter("n", n));
        }
        if n <= 0.0 {
            return Err(ExpressionError::NonPositiveParameter("n", n));
        }
        Ok(Self { vmax, k, n })
    }

    /// Maximal expression level.
    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    /// Half-saturation constant.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Hill coefficient.
    pub fn n(&self) -> f64 {
        self.n
    }

    fn respond(&self, tf: f64) -> f64 {
        if tf <= 0.0 {
            return 0.0;
        }
        // (K/C)^n via exp(n ln(K/C)): overflow saturates to +inf, which
        // correctly yields a zero response below K.
        let ratio = (self.n * (self.k / tf).ln()).exp();
        self.vmax / (1.0 + ratio)
    }
}

/// The expression model family, dispatched by variant.
///
/// Each variant validates its own parameters at construction; evaluation is
/// pure and shares one contract: the result is finite and >= 0, with raw
/// negative responses clamped to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionModel {
    /// Fixed output, environment ignored
    Constant(ConstantExpression),
    /// Proportional (or repressive) response to TF concentration
    Linear(LinearExpression),
    /// Saturating Hill-type response
    Sigmoidal(SigmoidalExpression),
}

impl ExpressionModel {
    /// Evaluate the model against an environmental snapshot.
    pub fn compute(&self, conditions: &Conditions) -> Result<f64, ComputationError> {
        self.compute_at(conditions.tf_concentration())
    }

    /// Evaluate at an explicit TF concentration.
    ///
    /// Used by the engine when a regulatory network derives a per-gene
    /// effective TF input that differs from the shared snapshot.
    pub fn compute_at(&self, tf: f64) -> Result<f64, ComputationError> {
        let raw = match self {
            Self::Constant(m) => m.level,
            Self::Linear(m) => m.slope * tf + m.intercept,
            Self::Sigmoidal(m) => m.respond(tf),
        };
        if !raw.is_finite() {
            return Err(ComputationError {
                model: self.name(),
                value: raw,
            });
        }
        Ok(raw.max(0.0))
    }

    /// Human-readable variant name, used in error reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant(_) => "constant expression",
            Self::Linear(_) => "linear expression",
            Self::Sigmoidal(_) => "sigmoidal expression",
        }
    }
}

impl From<ConstantExpression> for ExpressionModel {
    fn from(m: ConstantExpression) -> Self {
        Self::Constant(m)
    }
}

impl From<LinearExpression> for ExpressionModel {
    fn from(m: LinearExpression) -> Self {
        Self::Linear(m)
    }
}

impl From<SigmoidalExpression> for ExpressionModel {
    fn from(m: SigmoidalExpression) -> Self {
        Self::Sigmoidal(m)
    }
}
