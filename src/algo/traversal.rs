use std::collections::VecDeque;

use super::*;

/// A breadth-first traversal over the component of a start node.
///
/// Yields `(predecessor, node)` pairs in discovery order; the start node is
/// reported as its own predecessor. Every node is yielded at most once even
/// in multigraphs.
pub struct Bfs<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<(Node, Node)>,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Starts a new traversal at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);

        Self {
            graph,
            visited,
            queue: VecDeque::from([(start, start)]),
        }
    }

    /// Returns the number of nodes discovered so far
    pub fn num_visited(&self) -> NumNodes {
        self.visited.cardinality() as NumNodes
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = (Node, Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (pred, u) = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            // set_bit returns the previous state
            if !self.visited.set_bit(v) {
                self.queue.push_back((u, v));
            }
        }

        Some((pred, u))
    }
}

/// Exposes traversal algorithms directly as methods on graph data structures
pub trait Traversal: AdjacencyList {
    /// Returns a BFS iterator over the component of `start`
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}
