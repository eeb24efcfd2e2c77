/*!
# Circuit Traces

Converts an Eulerian circuit into a directed trace graph plus per-node labels.

Each traversed edge gets a **step index**: its position in the circuit,
starting at `0`. A node's label collects the step indices at which the circuit
*departs* from it, in ascending order. Together the labels partition all step
indices: every step departs from exactly one node.
*/

use itertools::Itertools;

use crate::prelude::*;

/// The position of an edge within a circuit
pub type StepIndex = NumEdges;

/// A directed trace of an Eulerian circuit with per-node departure labels
pub struct CircuitTrace {
    graph: AdjArray,
    labels: Vec<Vec<StepIndex>>,
    steps: Vec<Edge>,
}

impl CircuitTrace {
    /// Builds the trace of a circuit over `n` nodes.
    ///
    /// The circuit edges become directed arcs in traversal direction; parallel
    /// arcs are kept, so the trace graph has exactly one arc per step.
    /// ** Panics if a circuit edge references a node `>= n` **
    pub fn from_circuit(n: NumNodes, circuit: &[Edge]) -> Self {
        let mut graph = AdjArray::new(n);
        let mut labels = vec![Vec::new(); n as usize];

        for (i, &Edge(u, v)) in circuit.iter().enumerate() {
            graph.add_edge(u, v);
            labels[u as usize].push(i as StepIndex);
        }

        Self {
            graph,
            labels,
            steps: circuit.to_vec(),
        }
    }

    /// Returns the directed trace graph
    pub fn graph(&self) -> &AdjArray {
        &self.graph
    }

    /// Returns the number of steps in the circuit
    pub fn number_of_steps(&self) -> StepIndex {
        self.steps.len() as StepIndex
    }

    /// Returns all `(edge, step)` pairs ordered by step index
    pub fn sorted_labels(&self) -> impl Iterator<Item = (Edge, StepIndex)> + '_ {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, &e)| (e, i as StepIndex))
    }

    /// Returns the ascending step indices at which the circuit departs from `u`.
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &[StepIndex] {
        &self.labels[u as usize]
    }

    /// Formats the label of `u` as comma-separated step indices, e.g. `"0, 5, 9"`.
    /// Nodes the circuit never departs from get an empty string.
    pub fn format_label(&self, u: Node) -> String {
        self.label_of(u).iter().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    #[test]
    fn labels_partition_steps() {
        // Circuit through two triangles glued at node 2
        let circuit = [
            Edge(0, 1),
            Edge(1, 2),
            Edge(2, 3),
            Edge(3, 4),
            Edge(4, 2),
            Edge(2, 0),
        ];
        let trace = CircuitTrace::from_circuit(5, &circuit);

        assert_eq!(trace.number_of_steps(), 6);
        assert_eq!(trace.label_of(0), &[0]);
        assert_eq!(trace.label_of(2), &[2, 5]);
        assert_eq!(trace.format_label(2), "2, 5");

        // Every step departs from exactly one node
        let mut all_steps = (0..5).flat_map(|u| trace.label_of(u).iter().copied()).collect_vec();
        all_steps.sort_unstable();
        assert_eq!(all_steps, (0..6).collect_vec());

        // Each per-node list is ascending
        for u in 0..5 {
            assert!(trace.label_of(u).windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn sorted_labels_follow_the_circuit() {
        let circuit = [Edge(0, 1), Edge(1, 0)];
        let trace = CircuitTrace::from_circuit(2, &circuit);

        assert_eq!(
            trace.sorted_labels().collect_vec(),
            vec![(Edge(0, 1), 0), (Edge(1, 0), 1)]
        );
    }

    #[test]
    fn trace_graph_is_eulerian() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let circuit = graph.eulerian_circuit().unwrap();
        let trace = CircuitTrace::from_circuit(4, &circuit);

        assert!(trace.graph().is_eulerian());
        assert_eq!(trace.graph().number_of_edges(), 4);
    }

    #[test]
    fn dense_sample_trace_covers_all_steps() {
        use crate::gens::NumNodesGen;
        use crate::sampler::{EulerianSampler, GraphModel};
        use rand::SeedableRng;
        use rand_pcg::Pcg64Mcg;

        let rng = &mut Pcg64Mcg::seed_from_u64(42);
        let sampled = EulerianSampler::new(GraphModel::DenseRandom)
            .nodes(5)
            .sample(rng)
            .unwrap();
        let circuit = sampled.graph.eulerian_circuit().unwrap();
        let trace = CircuitTrace::from_circuit(5, &circuit);

        let num_edges = sampled.graph.number_of_edges();
        assert_eq!(trace.number_of_steps(), num_edges);
        assert_eq!(trace.sorted_labels().last().unwrap().1, num_edges - 1);
    }

    #[test]
    fn empty_circuit() {
        let trace = CircuitTrace::from_circuit(1, &[]);
        assert_eq!(trace.number_of_steps(), 0);
        assert_eq!(trace.format_label(0), "");
        assert!(trace.graph().is_eulerian());
    }
}
