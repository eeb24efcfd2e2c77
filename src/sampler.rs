/*!
# Eulerian Rejection Sampling

Draws candidate graphs from a structural model until one is Eulerian.

The sampler deliberately regenerates at least [`DEFAULT_RETRY_FLOOR`] times
before a candidate may be accepted, so the accepted graph is never an early
outlier of the model. By default it regenerates without bound; with a cap on
attempts it falls back to [eulerizing](crate::algo::Eulerize::eulerize) the
last candidate instead.
*/

use rand::Rng;

use crate::{algo::*, gens::*, prelude::*};

/// Edge probability of dense random candidates and rewiring probability of
/// small-world candidates
pub const EDGE_PROB: f64 = 0.9;

/// Minimum number of regenerations before a candidate may be accepted
pub const DEFAULT_RETRY_FLOOR: u32 = 50;

/// The structural model candidates are drawn from
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GraphModel {
    /// Dense `G(n, p)` graphs with `p = `[`EDGE_PROB`]
    DenseRandom,
    /// Small-world graphs with `n - 1` lattice neighbors, rewired with
    /// probability [`EDGE_PROB`]
    SmallWorld,
}

/// An accepted sample together with how it was obtained
pub struct SampledGraph {
    /// The Eulerian graph
    pub graph: AdjArrayUndir,
    /// Number of regenerations performed
    pub attempts: u32,
    /// *True* if the graph was eulerized instead of accepted directly
    pub augmented: bool,
}

/// Rejection-samples graphs from a [`GraphModel`] until one is Eulerian
#[derive(Debug, Copy, Clone)]
pub struct EulerianSampler {
    model: GraphModel,
    n: NumNodes,
    retry_floor: u32,
    max_attempts: Option<u32>,
}

impl EulerianSampler {
    /// Creates a sampler for a given model with the default retry floor and
    /// no attempt cap
    pub fn new(model: GraphModel) -> Self {
        Self {
            model,
            n: 0,
            retry_floor: DEFAULT_RETRY_FLOOR,
            max_attempts: None,
        }
    }

    /// Updates the minimum number of regenerations
    pub fn retry_floor(mut self, floor: u32) -> Self {
        self.retry_floor = floor;
        self
    }

    /// Caps the number of regenerations. Once the cap is reached, the last
    /// candidate is eulerized instead of rejected.
    pub fn max_attempts(mut self, cap: u32) -> Self {
        self.max_attempts = Some(cap);
        self
    }

    /// Draws one candidate from the configured model
    fn generate<R: Rng>(&self, rng: &mut R) -> AdjArrayUndir {
        match self.model {
            GraphModel::DenseRandom => AdjArrayUndir::from_edges(
                self.n,
                Gnp::new()
                    .nodes(self.n)
                    .prob(EDGE_PROB)
                    .stream(rng)
                    .filter(|e| !e.is_loop() && e.is_normalized()),
            ),
            GraphModel::SmallWorld => AdjArrayUndir::from_edges(
                self.n,
                SmallWorld::new()
                    .nodes(self.n)
                    .neighbors(self.n.saturating_sub(1))
                    .rewire_prob(EDGE_PROB)
                    .stream(rng),
            ),
        }
    }

    /// Samples candidates until one is Eulerian *and* the retry floor has
    /// been reached.
    ///
    /// Without an attempt cap this only returns an accepted candidate and may
    /// loop forever on node counts the model cannot produce Eulerian graphs
    /// for (e.g. `n = 2`). With a cap, the last candidate is eulerized once
    /// the cap is reached; this fails with [`EulerError::Disconnected`] if
    /// that candidate is disconnected.
    ///
    /// ** Panics if the number of nodes was not set **
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<SampledGraph, EulerError> {
        assert!(self.n > 0, "At least one node must be sampled!");

        let mut graph = self.generate(rng);
        let mut attempts = 0u32;

        while attempts < self.retry_floor || !graph.is_eulerian() {
            if self.max_attempts.is_some_and(|cap| attempts >= cap) {
                break;
            }
            graph = self.generate(rng);
            attempts += 1;
        }

        if graph.is_eulerian() {
            Ok(SampledGraph {
                graph,
                attempts,
                augmented: false,
            })
        } else {
            Ok(SampledGraph {
                graph: graph.eulerize()?,
                attempts,
                augmented: true,
            })
        }
    }
}

impl NumNodesGen for EulerianSampler {
    /// Updates the number of nodes of sampled candidates
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn singleton_is_accepted_after_floor() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        let sampled = EulerianSampler::new(GraphModel::DenseRandom)
            .nodes(1)
            .sample(rng)
            .unwrap();

        assert!(sampled.graph.is_eulerian());
        assert!(!sampled.augmented);
        // Candidates are regenerated up to the floor even when Eulerian
        assert_eq!(sampled.attempts, DEFAULT_RETRY_FLOOR);
    }

    #[test]
    fn dense_sample_is_eulerian() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        let sampled = EulerianSampler::new(GraphModel::DenseRandom)
            .nodes(5)
            .sample(rng)
            .unwrap();

        assert!(sampled.graph.is_eulerian());
        assert!(sampled.graph.degrees().all(|d| d % 2 == 0));
        assert!(sampled.attempts >= DEFAULT_RETRY_FLOOR);
        assert!(!sampled.augmented);
    }

    #[test]
    fn small_world_triangle_is_always_accepted() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        // For n = 3 every candidate is a triangle: rewiring is always skipped
        // since both endpoints already neighbor all other nodes
        let sampled = EulerianSampler::new(GraphModel::SmallWorld)
            .nodes(3)
            .sample(rng)
            .unwrap();

        assert_eq!(sampled.graph.number_of_edges(), 3);
        assert!(sampled.graph.degrees().all(|d| d == 2));
        assert_eq!(sampled.attempts, DEFAULT_RETRY_FLOOR);
    }

    #[test]
    fn small_world_sample_is_eulerian() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        let sampled = EulerianSampler::new(GraphModel::SmallWorld)
            .nodes(4)
            .sample(rng)
            .unwrap();

        assert!(sampled.graph.is_eulerian());
    }

    #[test]
    fn capped_sampler_always_yields_eulerian() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..20 {
            let result = EulerianSampler::new(GraphModel::DenseRandom)
                .nodes(5)
                .retry_floor(0)
                .max_attempts(0)
                .sample(rng);

            // The only candidate is either accepted, eulerized, or (rarely)
            // rejected as disconnected
            match result {
                Ok(sampled) => assert!(sampled.graph.is_eulerian()),
                Err(e) => assert_eq!(e, EulerError::Disconnected),
            }
        }
    }
}
