//! # codegraph-dot - Export Code Graphs to Graphviz
//!
//! codegraph-dot turns a code graph (functions, classes and the calls and
//! containment relationships between them) into a Graphviz DOT document.
//! Before rendering, the graph can be narrowed down by node type, by edge
//! label and by node count; edges are only ever emitted when both of their
//! endpoints are emitted too.
//!
//! ## Main Components
//!
//! - **Graph**: The [`graph::GraphSource`] trait, the [`graph::CodeGraph`]
//!   snapshot and the DOT renderer
//! - **Filter**: The ordered, order-preserving filter pipeline
//! - **Exporter**: Runs the pipeline and writes DOT to a sink, string or file
//! - **Config**: Export options and TOML filter profiles
//!
//! ## Usage
//!
//! ### Example: Exporting the Sample Graph
//!
//! ```
//! use codegraph_dot::exporter::DotExporter;
//! use codegraph_dot::filter::FilterConfig;
//! use codegraph_dot::graph::CodeGraph;
//!
//! # fn main() -> miette::Result<()> {
//! let exporter = DotExporter::new(FilterConfig::new());
//! let dot = exporter.export_to_string(&CodeGraph::sample())?;
//!
//! assert!(dot.starts_with("digraph CodeGraph {\n"));
//! assert!(dot.contains(r#""ClassX" -> "FuncA" [label="contains"];"#));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Filtering by Type, Label and Size
//!
//! ```
//! use codegraph_dot::exporter::DotExporter;
//! use codegraph_dot::filter::FilterConfig;
//! use codegraph_dot::graph::CodeGraph;
//!
//! # fn main() -> miette::Result<()> {
//! // Only functions, only call edges, at most one node
//! let exporter = DotExporter::new(
//!     FilterConfig::new()
//!         .with_node_types(["function"])
//!         .with_edge_labels(["calls"])
//!         .with_limit(1),
//! );
//!
//! let dot = exporter.export_to_string(&CodeGraph::sample())?;
//!
//! // FuncB was cut by the limit, so the FuncA -> FuncB call goes too
//! assert_eq!(
//!     dot,
//!     "digraph CodeGraph {\n  \"FuncA\" [label=\"FuncA\\n(function)\"];\n}\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Bringing Your Own Graph
//!
//! ```no_run
//! use std::path::Path;
//!
//! use codegraph_dot::core::{Edge, Node};
//! use codegraph_dot::exporter::DotExporter;
//! use codegraph_dot::filter::FilterConfig;
//! use codegraph_dot::graph::GraphSource;
//!
//! struct Index {
//!     nodes: Vec<Node>,
//!     edges: Vec<Edge>,
//! }
//!
//! impl GraphSource for Index {
//!     fn nodes(&self) -> &[Node] {
//!         &self.nodes
//!     }
//!
//!     fn edges(&self) -> &[Edge] {
//!         &self.edges
//!     }
//! }
//!
//! # fn main() -> miette::Result<()> {
//! let index = Index {
//!     nodes: vec![Node::new("lib::run", "run", "function")],
//!     edges: vec![],
//! };
//!
//! let summary = DotExporter::new(FilterConfig::new())
//!     .export_to_file(&index, Path::new("graph.dot"))?;
//! println!("{} nodes, {} edges", summary.nodes, summary.edges);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod exporter;
pub mod filter;
pub mod graph;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    execute_command(Cli::parse())
}
