/*!
`eulertrace` samples random undirected graphs until they are Eulerian and
produces a visual trace of an Eulerian circuit through the result.

# Representation

**Nodes** are `u32` values in the range `0..n` where `n` is the number of nodes
in the graph. **Edges** are a simple tuple-struct `Edge(Node, Node)`; whether a
given edge is interpreted as directed depends on the graph it lives in.

Two adjacency-array representations are provided in [`repr`]:
- [`AdjArrayUndir`](crate::repr::AdjArrayUndir) for the undirected candidate
  and augmented graphs,
- [`AdjArray`](crate::repr::AdjArray) for the directed circuit trace.

Both permit **parallel edges**: eulerization duplicates edges, and the trace of
a circuit through a multigraph contains parallel arcs.

# Pipeline

1. [`gens`] generates a random candidate graph from one of two structural
   models: dense random graphs (`G(n, p)`) or small-world graphs (ring lattice
   plus random rewiring).
2. [`sampler`] rejection-samples candidates until one is Eulerian, with a
   deliberate minimum number of regenerations, falling back to
   edge-augmentation if a cap on attempts is reached first.
3. [`algo`] provides the Eulerian predicate, the eulerization step and
   Hierholzer's circuit extraction.
4. [`trace`] converts the circuit into per-node departure-step labels.
5. [`io`] renders the labelled, colored trace in the DOT format.

# Usage

```no_run
use eulertrace::{
    algo::Eulerize,
    gens::NumNodesGen,
    sampler::{EulerianSampler, GraphModel},
    trace::CircuitTrace,
    prelude::*,
};
use rand_pcg::Pcg64Mcg;
use rand::SeedableRng;

let rng = &mut Pcg64Mcg::seed_from_u64(1234);
let sampled = EulerianSampler::new(GraphModel::DenseRandom)
    .nodes(6)
    .sample(rng)
    .unwrap();
let circuit = sampled.graph.eulerian_circuit().unwrap();
let trace = CircuitTrace::from_circuit(sampled.graph.number_of_nodes(), &circuit);
```
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod sampler;
pub mod trace;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `eulertrace::prelude` includes definitions for nodes and edges, all graph
/// operation traits as well as both graph representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
