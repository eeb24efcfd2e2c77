/*!
# Graph Algorithms

This module provides the graph algorithms built on top of the representations
in this crate. All algorithms are re-exported at the top level of this module,
so you can simply do:
```rust
use eulertrace::algo::*;
```
and gain access to traversal and all Eulerian routines.
*/

mod euler;
mod traversal;

use crate::prelude::*;

pub use euler::*;
pub use traversal::*;
