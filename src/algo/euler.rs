use std::fmt::Display;

use itertools::Itertools;

use super::*;

/// Errors reported by the Eulerian routines
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EulerError {
    /// The graph has more than one connected component
    Disconnected,
    /// The graph has no Eulerian circuit
    NotEulerian,
}

impl Display for EulerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EulerError::Disconnected => write!(f, "the graph is not connected"),
            EulerError::NotEulerian => write!(f, "the graph has no Eulerian circuit"),
        }
    }
}

impl std::error::Error for EulerError {}

/// Predicates for the existence of an Eulerian circuit
pub trait Eulerian {
    /// Returns *true* if all nodes lie in a single (weakly) connected component.
    /// Isolated nodes count: a graph with an edgeless node next to a cycle is
    /// not connected.
    fn is_connected(&self) -> bool;

    /// Returns *true* if the graph admits a closed walk that uses every edge
    /// exactly once
    fn is_eulerian(&self) -> bool;
}

impl Eulerian for AdjArrayUndir {
    fn is_connected(&self) -> bool {
        self.bfs(0).count() == self.len()
    }

    fn is_eulerian(&self) -> bool {
        self.degrees().all(|d| d % 2 == 0) && self.is_connected()
    }
}

impl Eulerian for AdjArray {
    fn is_connected(&self) -> bool {
        AdjArrayUndir::from_edges(self.number_of_nodes(), self.edges(false)).is_connected()
    }

    fn is_eulerian(&self) -> bool {
        let mut in_degrees = vec![0 as NumNodes; self.len()];
        for Edge(_, v) in self.edges(false) {
            in_degrees[v as usize] += 1;
        }

        // A digraph whose nodes are all balanced is strongly connected iff it
        // is weakly connected, so a weak reachability check suffices
        self.vertices()
            .all(|u| self.degree_of(u) == in_degrees[u as usize])
            && self.is_connected()
    }
}

/// Edge-augmentation and circuit extraction for undirected multigraphs
pub trait Eulerize: Eulerian {
    /// Returns a multigraph in which every node has even degree, obtained by
    /// duplicating existing edges along shortest paths between odd-degree
    /// nodes. The input graph is left untouched.
    ///
    /// Fails with [`EulerError::Disconnected`] if the graph is not connected,
    /// as no amount of duplication connects separate components.
    fn eulerize(&self) -> Result<AdjArrayUndir, EulerError>;

    /// Extracts an Eulerian circuit starting and ending at node `0` using
    /// Hierholzer's algorithm. Runs in `O(n + m)`.
    ///
    /// Returns the traversed edges in order; each returned edge is directed in
    /// traversal direction. An edgeless graph yields an empty circuit.
    ///
    /// Fails with [`EulerError::NotEulerian`] if some node has odd degree or
    /// the graph is disconnected.
    fn eulerian_circuit(&self) -> Result<Vec<Edge>, EulerError>;
}

impl Eulerize for AdjArrayUndir {
    fn eulerize(&self) -> Result<AdjArrayUndir, EulerError> {
        if !self.is_connected() {
            return Err(EulerError::Disconnected);
        }

        let mut graph = self.clone();
        let mut odd = graph
            .vertices()
            .filter(|&u| graph.degree_of(u) % 2 == 1)
            .collect_vec();

        // The handshake lemma guarantees an even number of odd nodes. Match
        // each odd node with the nearest remaining one and duplicate the
        // connecting shortest path, fixing the parity of both endpoints.
        while let Some(u) = odd.pop() {
            let mut parent = vec![INVALID_NODE; graph.len()];
            let mut partner = INVALID_NODE;
            for (pred, v) in graph.bfs(u) {
                parent[v as usize] = pred;
                if v != u && odd.contains(&v) {
                    partner = v;
                    break;
                }
            }
            debug_assert_ne!(partner, INVALID_NODE);
            odd.retain(|&w| w != partner);

            let mut v = partner;
            while v != u {
                let p = parent[v as usize];
                graph.add_edge(p, v);
                v = p;
            }
        }

        Ok(graph)
    }

    fn eulerian_circuit(&self) -> Result<Vec<Edge>, EulerError> {
        if !self.is_eulerian() {
            return Err(EulerError::NotEulerian);
        }

        if self.is_singleton_graph() {
            return Ok(Vec::new());
        }

        // Incidence lists sharing one id per edge so that traversing an edge
        // consumes it from both endpoints at once
        let mut incident: Vec<Vec<(Node, NumEdges)>> = vec![Vec::new(); self.len()];
        for (id, Edge(u, v)) in self.edges(true).enumerate() {
            let id = id as NumEdges;
            incident[u as usize].push((v, id));
            if u != v {
                incident[v as usize].push((u, id));
            }
        }

        let mut used = self.edge_bitset_unset();
        let mut cursor = vec![0usize; self.len()];
        let mut stack = vec![0 as Node];
        let mut path = Vec::with_capacity(self.number_of_edges() as usize + 1);

        while let Some(&u) = stack.last() {
            let mut advanced = false;

            while let Some(&(v, id)) = incident[u as usize].get(cursor[u as usize]) {
                cursor[u as usize] += 1;
                if !used.set_bit(id) {
                    stack.push(v);
                    advanced = true;
                    break;
                }
            }

            if !advanced {
                path.push(u);
                stack.pop();
            }
        }

        path.reverse();
        Ok(path
            .into_iter()
            .tuple_windows()
            .map(|(u, v)| Edge(u, v))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts that `circuit` is a closed walk from node `0` using every edge
    /// of `graph` exactly once
    fn assert_valid_circuit(graph: &AdjArrayUndir, circuit: &[Edge]) {
        assert_eq!(circuit.len(), graph.number_of_edges() as usize);
        assert_eq!(circuit.first().unwrap().0, 0);
        assert_eq!(circuit.last().unwrap().1, 0);

        for (a, b) in circuit.iter().tuple_windows() {
            assert_eq!(a.1, b.0);
        }

        let mut used = circuit.iter().map(|e| e.normalized()).collect_vec();
        used.sort_unstable();
        assert_eq!(used, graph.ordered_edges(true).collect_vec());
    }

    #[test]
    fn cycle_is_eulerian() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(graph.is_connected());
        assert!(graph.is_eulerian());

        let circuit = graph.eulerian_circuit().unwrap();
        assert_valid_circuit(&graph, &circuit);
    }

    #[test]
    fn odd_degrees_are_rejected() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        assert!(graph.is_connected());
        assert!(!graph.is_eulerian());
        assert_eq!(graph.eulerian_circuit(), Err(EulerError::NotEulerian));
    }

    #[test]
    fn isolated_node_disconnects() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 0)]);
        assert!(!graph.is_connected());
        assert!(!graph.is_eulerian());
    }

    #[test]
    fn singleton_is_eulerian() {
        let graph = AdjArrayUndir::new(1);
        assert!(graph.is_eulerian());
        assert_eq!(graph.eulerian_circuit().unwrap(), Vec::new());
    }

    #[test]
    fn two_triangles_sharing_a_node() {
        let graph =
            AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        assert!(graph.is_eulerian());

        let circuit = graph.eulerian_circuit().unwrap();
        assert_valid_circuit(&graph, &circuit);
    }

    #[test]
    fn eulerize_path() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert!(!graph.is_eulerian());

        let augmented = graph.eulerize().unwrap();
        assert!(augmented.is_eulerian());
        // All three edges get a parallel copy
        assert_eq!(augmented.number_of_edges(), 6);

        let circuit = augmented.eulerian_circuit().unwrap();
        assert_valid_circuit(&augmented, &circuit);
    }

    #[test]
    fn eulerize_keeps_eulerian_graphs() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        let augmented = graph.eulerize().unwrap();
        assert_eq!(augmented.number_of_edges(), graph.number_of_edges());
    }

    #[test]
    fn eulerize_rejects_disconnected() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
        assert_eq!(graph.eulerize(), Err(EulerError::Disconnected));
    }

    #[test]
    fn directed_trace_is_eulerian() {
        let graph = AdjArray::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert!(graph.is_eulerian());

        let unbalanced = AdjArray::from_edges(3, [(0, 1), (1, 2), (2, 0), (0, 2)]);
        assert!(!unbalanced.is_eulerian());
    }
}
