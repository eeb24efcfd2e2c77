use rand::Rng;

use crate::{gens::*, utils::*};

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with probability `p`
/// independent from each other.
///
/// Due to this independence, we do not need to incorporate normalized-checks for undirected graphs
/// or self-loop checks in the generator itself as the overhead is minimal (`2 * n/(n - 1)` at most).
///
/// Filterings of this sort are thus up to the caller.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u64,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = Some(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        assert!(self.n > 0, "At least one node must be generated!");
        let p = self.p.expect("Probability of Gnp was not set!");

        // The maximum possible value an edge can be mapped to
        let max_value = self.n * self.n;
        let n = self.n;

        GeometricJumper::new(p)
            .stop_at(max_value)
            .iter(rng)
            .map(move |x| Edge::from_u64(x, n))
    }
}
