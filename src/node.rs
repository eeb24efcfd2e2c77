/*!
# Node Representation

We choose `Node = u32`: the graphs this tool samples are small, and `u32`
allows manipulating node values directly without abstracting over them.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes are dense unsigned integers from `0` to `n - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
