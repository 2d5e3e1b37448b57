//! Mutation operations for gene expression levels.
//!
//! Mutation perturbs each gene independently: a per-gene Bernoulli decision
//! at the configured rate, and a Gaussian magnitude when the decision fires.
//! Perturbed levels re-clamp to zero from below, so mutation can silence a
//! gene but never drive it negative.
//!
//! This phase is the dominant cost of the generation pipeline: unlike the
//! expression and selection phases it needs randomness for every gene of
//! every individual. Random values are therefore drawn in pre-batched buffers
//! (one pass per individual for decisions, one for magnitudes) and applied
//! elementwise, rather than interleaving one draw per gene inside the
//! decision loop.

pub use crate::errors::MutationError;
use crate::genome::Individual;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Point mutation: independent per-gene Gaussian perturbation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMutation {
    /// Probability that a given gene is perturbed
    rate: f64,
    /// Standard deviation of the Gaussian perturbation
    noise_scale: f64,
}

impl PointMutation {
    /// Create a point mutation model.
    ///
    /// # Arguments
    /// * `rate` - Per-gene perturbation probability (0.0 to 1.0).
    ///   rate = 0 never changes a gene; rate = 1 perturbs every gene.
    /// * `noise_scale` - Standard deviation of the Gaussian magnitude
    ///   (must be finite and >= 0).
    pub fn new(rate: f64, noise_scale: f64) -> Result<Self, MutationError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(MutationError::InvalidMutationRate(rate));
        }
        if !noise_scale.is_finite() || noise_scale < 0.0 {
            return Err(MutationError::InvalidNoiseScale(noise_scale));
        }
        Ok(Self { rate, noise_scale })
    }

    /// A model that never mutates anything.
    pub fn disabled() -> Self {
        Self {
            rate: 0.0,
            noise_scale: 0.0,
        }
    }

    /// Per-gene perturbation probability.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Standard deviation of the perturbation magnitude.
    pub fn noise_scale(&self) -> f64 {
        self.noise_scale
    }

    /// Perturb an individual's genes in place.
    ///
    /// Both random buffers (decision uniforms and Gaussian magnitudes) are
    /// drawn up front in gene order, so the generator is consumed in a fixed,
    /// reproducible sequence of exactly `2 * gene_count` logical draws.
    pub fn mutate<R: Rng + ?Sized>(&self, individual: &mut Individual, rng: &mut R) {
        let n = individual.gene_count();
        if n == 0 || self.rate == 0.0 {
            return;
        }

        let decisions: Vec<f64> = (0..n).map(|_| rng.random::<f64>()).collect();

        let normal = Normal::new(0.0, self.noise_scale).unwrap(); // scale validated in new()
        let magnitudes: Vec<f64> = (0..n).map(|_| normal.sample(&mut *rng)).collect();

        for ((gene, &decision), &magnitude) in individual
            .genes_mut()
            .iter_mut()
            .zip(decisions.iter())
            .zip(magnitudes.iter())
        {
            // decision is in [0, 1), so rate = 1 fires for every gene
            if decision < self.rate {
                gene.perturb(magnitude);
            }
        }
    }
}

/// The mutation model family, dispatched by variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MutationModel {
    /// Independent per-gene Gaussian perturbation
    Point(PointMutation),
}

impl MutationModel {
    /// Apply the mutation model to one individual in place.
    pub fn mutate<R: Rng + ?Sized>(&self, individual: &mut Individual, rng: &mut R) {
        match self {
            Self::Point(m) => m.mutate(individual, rng),
        }
    }

    /// Human-readable variant name, used in error reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Point(_) => "point mutation",
        }
    }
}

impl From<PointMutation> for MutationModel {
    fn from(m: PointMutation) -> Self {
        Self::Point(m)
    }
}
