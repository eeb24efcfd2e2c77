/*!
# IO

Utilities for writing graphs and circuit traces to the
[DOT language](https://graphviz.org/doc/info/lang.html) of
[GraphViz](https://graphviz.org/).

DOT is the presentation boundary of this crate: everything a visualizer needs
(arc directions, node colors, step labels) is expressed here, and nothing else
depends on how the output is drawn.
*/

pub mod dot;

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use dot::*;
