//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw colored and labeled
//! nodes and edges.
//!
//! The highest-level entry point is [`write_trace`], which renders a full
//! [`CircuitTrace`]: one arc per circuit step, the start node filled green,
//! all other nodes filled red, and each node labeled with its departure steps.

use std::fmt::Display;

use super::*;
use crate::trace::CircuitTrace;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Prefix of a node (default: 'u')
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            prefix: "u".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of a node (`u` by default). Can also be changed while drawing to draw
    /// additional subgraphs apart from the original graph.
    pub fn node_prefix<S>(self, prefix: S) -> DotWriter
    where
        S: Into<String>,
    {
        DotWriter {
            prefix: prefix.into(),
        }
    }

    /// Writes the opening brackets of the graph.
    /// Must know if the graph is undirected
    pub fn start_graph<W>(&self, writer: &mut W, directed: bool) -> Result<()>
    where
        W: Write,
    {
        let graph_name = if directed { "digraph" } else { "graph" };

        writeln!(writer, "{graph_name} {{")
    }

    /// Formats a node depending on `self.prefix`
    fn format_node(&self, u: Node) -> String {
        format!("{}{u}", self.prefix)
    }

    /// Writes an iterator of edges to `writer`. Must know if the edges are directed and if they
    /// should be colored.
    pub fn write_edges<W, I>(
        &self,
        writer: &mut W,
        edges: I,
        directed: bool,
        color: Option<DotColor>,
    ) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge>,
    {
        let edge_dir = if directed { "->" } else { "--" };

        let edge_color = if let Some(c) = color {
            &format!("[color={c}]")
        } else {
            ""
        };

        for Edge(u, v) in edges.into_iter() {
            write!(
                writer,
                "{}{edge_dir}{}{edge_color};",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        writeln!(writer)
    }

    /// Writes a single node filled with `color` and annotated with `label`
    pub fn write_labeled_node<W>(
        &self,
        writer: &mut W,
        u: Node,
        color: DotColor,
        label: &str,
    ) -> Result<()>
    where
        W: Write,
    {
        writeln!(
            writer,
            "{}[style=filled, fillcolor={color}, label=\"{label}\"];",
            self.format_node(u)
        )
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

/// Writes a circuit trace to `writer` in the Dot-Format.
///
/// Arcs point in traversal direction with one arc per step. The start node
/// `0` is filled [`DotColor::Green`], all other nodes [`DotColor::Red`], and
/// every node is labeled with the comma-separated step indices at which the
/// circuit departs from it.
pub fn write_trace<W>(trace: &CircuitTrace, mut writer: W) -> Result<()>
where
    W: Write,
{
    let dot_writer = DotWriter::new();

    dot_writer.start_graph(&mut writer, true)?;
    dot_writer.write_edges(&mut writer, trace.graph().edges(false), true, None)?;
    for u in trace.graph().vertices() {
        let color = if u == 0 {
            DotColor::Green
        } else {
            DotColor::Red
        };
        dot_writer.write_labeled_node(&mut writer, u, color, &trace.format_label(u))?;
    }
    dot_writer.finish_graph(&mut writer)
}

/// Writes a circuit trace to the file at `path` in the Dot-Format.
/// See [`write_trace`] for the rendered attributes.
pub fn write_trace_file<P>(trace: &CircuitTrace, path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    write_trace(trace, BufWriter::new(File::create(path)?))
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Colors used for node fillings. All values are permitted Svg-Dot colors as listed in
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Gray,
    Green,
    Orange,
    Red,
    White,
    Yellow,
}
