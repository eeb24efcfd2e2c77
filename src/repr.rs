/*!
# Graph Representations

Two adjacency-array representations back the whole pipeline:

- [`AdjArrayUndir`]: undirected, used for the sampled candidate graphs and the
  eulerized multigraph.
- [`AdjArray`]: directed, used for the circuit trace.

Both store one `Vec<Node>` per node and both are **multigraphs**:
[`GraphEdgeEditing::add_edge`] pushes unconditionally, so parallel edges are
represented by repeated neighborhood entries. Use
[`GraphEdgeEditing::try_add_edge`] for simple-graph insertion.
*/

use crate::{
    edge::NumEdges,
    node::{Node, NumNodes},
    ops::*,
};

/// An undirected multigraph backed by adjacency arrays.
/// Every edge `{u, v}` with `u != v` is stored in both endpoint neighborhoods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjArrayUndir {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

/// A directed multigraph storing only outgoing adjacency arrays
#[derive(Clone)]
pub struct AdjArray {
    out_nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

macro_rules! impl_common_graph_ops {
    ($graph:ident => $nbs:ident) => {
        impl GraphNodeOrder for $graph {
            fn number_of_nodes(&self) -> NumNodes {
                self.$nbs.len() as NumNodes
            }
        }

        impl GraphEdgeOrder for $graph {
            fn number_of_edges(&self) -> NumEdges {
                self.num_edges
            }
        }

        impl GraphNew for $graph {
            fn new(n: NumNodes) -> Self {
                assert!(n > 0);
                Self {
                    $nbs: vec![Vec::new(); n as usize],
                    num_edges: 0,
                }
            }
        }

        impl AdjacencyList for $graph {
            fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                self.$nbs[u as usize].iter().copied()
            }

            fn degree_of(&self, u: Node) -> NumNodes {
                self.$nbs[u as usize].len() as NumNodes
            }
        }

        impl AdjacencyTest for $graph {
            fn has_edge(&self, u: Node, v: Node) -> bool {
                self.$nbs[u as usize].contains(&v)
            }
        }
    };
}

impl_common_graph_ops!(AdjArrayUndir => nbs);
impl_common_graph_ops!(AdjArray => out_nbs);

impl GraphEdgeEditing for AdjArrayUndir {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.nbs[u as usize].push(v);
        if u != v {
            self.nbs[v as usize].push(u);
        }
        self.num_edges += 1;
    }

    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            false
        } else {
            self.add_edge(u, v);
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        let Some(pos) = self.nbs[u as usize].iter().position(|&w| w == v) else {
            return false;
        };
        self.nbs[u as usize].swap_remove(pos);

        if u != v {
            let mirror = self.nbs[v as usize]
                .iter()
                .position(|&w| w == u)
                .expect("mirrored neighborhood entry must exist");
            self.nbs[v as usize].swap_remove(mirror);
        }

        self.num_edges -= 1;
        true
    }
}

impl GraphEdgeEditing for AdjArray {
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(v < self.number_of_nodes());
        self.out_nbs[u as usize].push(v);
        self.num_edges += 1;
    }

    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            false
        } else {
            self.add_edge(u, v);
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        let Some(pos) = self.out_nbs[u as usize].iter().position(|&w| w == v) else {
            return false;
        };
        self.out_nbs[u as usize].swap_remove(pos);
        self.num_edges -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::Edge;

    #[test]
    fn undirected_basics() {
        let mut g = AdjArrayUndir::new(5);
        assert_eq!(g.number_of_nodes(), 5);
        assert_eq!(g.number_of_edges(), 0);
        assert!(g.is_singleton_graph());

        g.add_edges([(0, 1), (1, 2), (3, 4)]);
        assert_eq!(g.number_of_edges(), 3);
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(1, 0));
        assert!(!g.has_edge(0, 2));
        assert_eq!(g.degree_of(1), 2);

        assert_eq!(
            g.ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(3, 4)]
        );
    }

    #[test]
    fn undirected_parallel_edges() {
        let mut g = AdjArrayUndir::new(3);
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.degree_of(0), 2);
        assert_eq!(g.degree_of(1), 2);
        assert_eq!(g.edges(true).count(), 2);

        // try_add_edge refuses another copy
        assert!(!g.try_add_edge(0, 1));
        assert!(g.try_add_edge(1, 2));
        assert_eq!(g.number_of_edges(), 3);

        // removal takes out one copy at a time
        assert!(g.try_remove_edge(0, 1));
        assert_eq!(g.number_of_edges(), 2);
        assert!(g.has_edge(0, 1));
        assert!(g.try_remove_edge(1, 0));
        assert!(!g.has_edge(0, 1));
        assert!(!g.try_remove_edge(0, 1));
    }

    #[test]
    fn directed_basics() {
        let mut g = AdjArray::new(4);
        g.add_edges([(0, 1), (1, 2), (2, 0), (1, 2)]);
        assert_eq!(g.number_of_edges(), 4);
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        assert_eq!(g.degree_of(1), 2);
        assert_eq!(g.neighbors_of(1).collect_vec(), vec![2, 2]);

        assert!(g.try_remove_edge(1, 2));
        assert_eq!(g.degree_of(1), 1);
        assert!(g.has_edge(1, 2));
    }

    #[test]
    fn from_edges_counts() {
        let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(g.number_of_edges(), 4);
        assert!(g.degrees().all(|d| d == 2));
        assert_eq!(g.number_of_nodes_with_neighbors(), 4);
    }
}
