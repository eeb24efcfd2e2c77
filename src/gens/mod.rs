/*!
# Graph Generators

This module provides the two random graph models candidates are drawn from.

Each generator allows parameterized control over structural properties of the
graph and produces its edges through an iterator. Generators follow a
builder-style pattern for fluent configuration:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using the builder methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

Supported models:
- `G(n,p)`: Erdős–Rényi model with independent edge probability
- Small-world: ring lattice with random rewiring (Watts-Strogatz model)
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod small_world;

pub use gnp::*;
pub use small_world::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    ///
    /// Depending on the underlying graph model, this might also be just an
    /// iterator over an already generated list of edges if a direct stream is
    /// not feasible in the model.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}
