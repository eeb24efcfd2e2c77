use rand::Rng;

use crate::{gens::*, utils::*};

/// Small-world graphs (Watts-Strogatz model) start from a ring lattice in which every node is
/// connected to its `k / 2` nearest neighbors on each side. Every lattice edge `(u, v)` is then
/// rewired with probability `p` to a uniform random edge `(u, w)`, rejecting self-loops and
/// already existing edges.
///
/// The generated graph is simple: rewiring never introduces parallel edges or self-loops. If a
/// node already neighbors all other nodes, the rewiring of its lattice edge is skipped.
///
/// For odd `k`, only `(k - 1) / 2` neighbors per side are connected.
#[derive(Debug, Copy, Clone, Default)]
pub struct SmallWorld {
    n: NumNodes,
    k: NumNodes,
    p: Option<f64>,
}

impl SmallWorld {
    /// Creates a new empty small-world generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the number of lattice neighbors `k`
    pub fn neighbors(mut self, k: NumNodes) -> Self {
        self.k = k;
        self
    }

    /// Updates the rewiring probability `p`
    pub fn rewire_prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = Some(prob);
        self
    }
}

impl NumNodesGen for SmallWorld {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for SmallWorld {
    /// Generates the rewired ring lattice.
    ///
    /// Rewiring needs adjacency tests against the partially rewired graph, so the graph is built
    /// eagerly and the stream iterates over its finished edge list.
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let (n, k) = (self.n, self.k);
        assert!(n > 0, "At least one node must be generated!");
        assert!(k < n, "Each node can have at most n - 1 lattice neighbors!");
        let p = self.p.expect("Rewiring probability was not set!");

        let mut graph = AdjArrayUndir::new(n);

        // Ring lattice: j < n / 2, so no edge is produced twice
        for j in 1..=(k / 2) {
            for u in graph.vertices() {
                graph.add_edge(u, (u + j) % n);
            }
        }

        // Rewire each lattice edge with probability p
        for j in 1..=(k / 2) {
            for u in 0..n {
                let v = (u + j) % n;
                if !rng.random_bool(p) {
                    continue;
                }

                let mut w = rng.random_range(0..n);
                let mut rewire = true;
                while w == u || graph.has_edge(u, w) {
                    w = rng.random_range(0..n);
                    if graph.degree_of(u) >= n - 1 {
                        // u is already connected to every other node
                        rewire = false;
                        break;
                    }
                }

                if rewire {
                    graph.remove_edge(u, v);
                    graph.add_edge(u, w);
                }
            }
        }

        graph.edges(true).collect::<Vec<_>>().into_iter()
    }
}
