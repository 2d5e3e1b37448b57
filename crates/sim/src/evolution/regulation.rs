//! Regulatory feedback network over gene positions.
//!
//! Genes do not only respond to the external environment: the products of
//! other genes can act as transcription factors themselves. The network
//! captures this as a directed, weighted graph over gene positions. Each
//! generation, the expression phase feeds the population's current expression
//! levels through the network to derive a per-gene regulatory input, which is
//! added to the baseline TF concentration of the shared environmental
//! snapshot.
//!
//! The graph is stored as a sparse edge list and evaluated with a single
//! weighted-accumulation pass per individual, so the cost scales with the
//! number of edges rather than the square of the gene count. A dense
//! gene-by-gene iteration is the main performance hazard here and is
//! deliberately not expressible through this API.

pub use crate::errors::NetworkError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One weighted regulatory interaction: `source` expression feeds `target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryEdge {
    /// Gene whose expression acts as the transcription factor
    pub source: usize,
    /// Gene receiving the regulatory input
    pub target: usize,
    /// Interaction strength; negative weights are repressive
    pub weight: f64,
}

impl RegulatoryEdge {
    /// Create an edge.
    pub fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// A directed, weighted regulatory graph over `{0 .. gene_count - 1}`.
///
/// Read-only after construction. The network is a population-wide,
/// generation-invariant structure owned by the simulation, not by any
/// individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryNetwork {
    gene_count: usize,
    edges: Vec<RegulatoryEdge>,
}

impl RegulatoryNetwork {
    /// Create a network from an explicit edge list.
    ///
    /// # Errors
    /// Returns an error if any edge endpoint is outside
    /// `0..gene_count` or any weight is non-finite.
    pub fn new(gene_count: usize, edges: Vec<RegulatoryEdge>) -> Result<Self, NetworkError> {
        for edge in &edges {
            if edge.source >= gene_count || edge.target >= gene_count {
                return Err(NetworkError::EdgeOutOfBounds {
                    source: edge.source,
                    target: edge.target,
                    genes: gene_count,
                });
            }
            if !edge.weight.is_finite() {
                return Err(NetworkError::NonFiniteWeight {
                    source: edge.source,
                    target: edge.target,
                });
            }
        }
        Ok(Self { gene_count, edges })
    }

    /// Create a network with no edges (neutral regulation).
    pub fn empty(gene_count: usize) -> Self {
        Self {
            gene_count,
            edges: Vec::new(),
        }
    }

    /// Sample a random network at the given edge density.
    ///
    /// Each ordered gene pair (self-loops included) carries an edge with
    /// probability `density`; weights are drawn uniformly from
    /// `[-weight_scale, weight_scale]`.
    ///
    /// # Errors
    /// Returns an error if `density` is outside `[0, 1]` or `weight_scale`
    /// is non-finite or negative.
    pub fn random<R: Rng + ?Sized>(
        gene_count: usize,
        density: f64,
        weight_scale: f64,
        rng: &mut R,
    ) -> Result<Self, NetworkError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(NetworkError::InvalidDensity(density));
        }
        if !weight_scale.is_finite() || weight_scale < 0.0 {
            return Err(NetworkError::NonFiniteWeight {
                source: 0,
                target: 0,
            });
        }

        let mut edges = Vec::new();
        for target in 0..gene_count {
            for source in 0..gene_count {
                if rng.random::<f64>() < density {
                    let weight = if weight_scale == 0.0 {
                        0.0
                    } else {
                        rng.random_range(-weight_scale..weight_scale)
                    };
                    edges.push(RegulatoryEdge::new(source, target, weight));
                }
            }
        }
        Ok(Self { gene_count, edges })
    }

    /// Number of gene positions the network is defined over.
    pub fn gene_count(&self) -> usize {
        self.gene_count
    }

    /// Number of regulatory edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge list.
    pub fn edges(&self) -> &[RegulatoryEdge] {
        &self.edges
    }

    /// Compute the per-gene regulatory TF input from current expression
    /// levels.
    ///
    /// For gene `i`, the input is the weighted sum of the expression levels
    /// of its incoming edges' sources. One accumulation pass over the edge
    /// list; O(edges), independent of gene count.
    ///
    /// `inputs` is cleared and resized to `gene_count`; reusing the buffer
    /// across calls avoids per-individual allocation.
    pub fn tf_inputs(&self, levels: &[f64], inputs: &mut Vec<f64>) {
        inputs.clear();
        inputs.resize(self.gene_count, 0.0);
        for edge in &self.edges {
            inputs[edge.target] += edge.weight * levels[edge.source];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    // ===== Construction Tests =====

    #[test]
    fn test_network_new() {
        let edges = vec![
            RegulatoryEdge::new(0, 1, 0.5),
            RegulatoryEdge::new(1, 2, -0.3),
        ];
        let network = RegulatoryNetwork::new(3, edges).unwrap();
        assert_eq!(network.gene_count(), 3);
        assert_eq!(network.edge_count(), 2);
    }

    #[test]
    fn test_network_rejects_out_of_bounds_source() {
        let err = RegulatoryNetwork::new(3, vec![RegulatoryEdge::new(5, 1, 0.5)]).unwrap_err();
        assert!(matches!(err, NetworkError::EdgeOutOfBounds { .. }));
    }

    #[test]
    fn test_network_rejects_out_of_bounds_target() {
        assert!(RegulatoryNetwork::new(3, vec![RegulatoryEdge::new(0, 3, 0.5)]).is_err());
    }

    #[test]
    fn test_network_rejects_non_finite_weight() {
        let err =
            RegulatoryNetwork::new(3, vec![RegulatoryEdge::new(0, 1, f64::NAN)]).unwrap_err();
        assert!(matches!(err, NetworkError::NonFiniteWeight { .. }));
    }

    #[test]
    fn test_network_empty() {
        let network = RegulatoryNetwork::empty(10);
        assert_eq!(network.gene_count(), 10);
        assert_eq!(network.edge_count(), 0);
    }

    // ===== Random Construction Tests =====

    #[test]
    fn test_random_network_density_bounds() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        assert!(RegulatoryNetwork::random(5, -0.1, 1.0, &mut rng).is_err());
        assert!(RegulatoryNetwork::random(5, 1.1, 1.0, &mut rng).is_err());
    }

    #[test]
    fn test_random_network_zero_density_has_no_edges() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let network = RegulatoryNetwork::random(10, 0.0, 1.0, &mut rng).unwrap();
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn test_random_network_full_density_is_complete() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let network = RegulatoryNetwork::random(4, 1.0, 1.0, &mut rng).unwrap();
        assert_eq!(network.edge_count(), 16);
    }

    #[test]
    fn test_random_network_deterministic_under_seed() {
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(9);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(9);
        let n1 = RegulatoryNetwork::random(8, 0.3, 2.0, &mut rng1).unwrap();
        let n2 = RegulatoryNetwork::random(8, 0.3, 2.0, &mut rng2).unwrap();
        assert_eq!(n1, n2);
    }

    #[test]
    fn test_random_network_edge_count_tracks_density() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let network = RegulatoryNetwork::random(20, 0.25, 1.0, &mut rng).unwrap();
        // 400 candidate pairs at density 0.25: expect ~100 edges.
        assert!(network.edge_count() > 60);
        assert!(network.edge_count() < 140);
    }

    // ===== TF Input Tests =====

    #[test]
    fn test_tf_inputs_weighted_sum() {
        // gene 2 receives 0.5 * e0 + 2.0 * e1
        let edges = vec![
            RegulatoryEdge::new(0, 2, 0.5),
            RegulatoryEdge::new(1, 2, 2.0),
        ];
        let network = RegulatoryNetwork::new(3, edges).unwrap();

        let mut inputs = Vec::new();
        network.tf_inputs(&[1.0, 3.0, 10.0], &mut inputs);

        assert_eq!(inputs, vec![0.0, 0.0, 6.5]);
    }

    #[test]
    fn test_tf_inputs_repressive_edge() {
        let network =
            RegulatoryNetwork::new(2, vec![RegulatoryEdge::new(0, 1, -1.5)]).unwrap();

        let mut inputs = Vec::new();
        network.tf_inputs(&[2.0, 0.0], &mut inputs);

        assert_eq!(inputs, vec![0.0, -3.0]);
    }

    #[test]
    fn test_tf_inputs_self_loop() {
        let network = RegulatoryNetwork::new(1, vec![RegulatoryEdge::new(0, 0, 0.5)]).unwrap();

        let mut inputs = Vec::new();
        network.tf_inputs(&[4.0], &mut inputs);

        assert_eq!(inputs, vec![2.0]);
    }

    #[test]
    fn test_tf_inputs_no_edges_all_zero() {
        let network = RegulatoryNetwork::empty(4);

        let mut inputs = Vec::new();
        network.tf_inputs(&[1.0, 2.0, 3.0, 4.0], &mut inputs);

        assert_eq!(inputs, vec![0.0; 4]);
    }

    #[test]
    fn test_tf_inputs_reuses_buffer() {
        let network = RegulatoryNetwork::new(2, vec![RegulatoryEdge::new(0, 1, 1.0)]).unwrap();

        let mut inputs = vec![99.0; 7];
        network.tf_inputs(&[1.0, 1.0], &mut inputs);
        assert_eq!(inputs, vec![0.0, 1.0]);

        network.tf_inputs(&[2.0, 2.0], &mut inputs);
        assert_eq!(inputs, vec![0.0, 2.0]);
    }

    #[test]
    fn test_parallel_edges_accumulate() {
        let edges = vec![
            RegulatoryEdge::new(0, 1, 1.0),
            RegulatoryEdge::new(0, 1, 0.5),
        ];
        let network = RegulatoryNetwork::new(2, edges).unwrap();

        let mut inputs = Vec::new();
        network.tf_inputs(&[2.0, 0.0], &mut inputs);
        assert_eq!(inputs, vec![0.0, 3.0]);
    }
}
