//! # Graph Sources and Rendering Module
//!
//! This module provides the code graph abstractions the exporter reads from
//! and the DOT renderer it writes with.
//!
//! ## Components
//!
//! ### Graph Sources
//! - **GraphSource**: Anything that can hand out ordered nodes and edges
//! - **CodeGraph**: An owned snapshot, either the built-in sample or loaded
//!   from a JSON graph file
//!
//! ### Graph Rendering
//! - **DotRenderer**: Serializes a filtered graph as Graphviz DOT
//!
//! ## Example
//!
//! ```
//! use codegraph_dot::core::{Edge, Node};
//! use codegraph_dot::filter::FilterConfig;
//! use codegraph_dot::graph::{CodeGraph, DotRenderer, GraphSource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = CodeGraph::new(
//!     vec![
//!         Node::new("parse", "parse", "function"),
//!         Node::new("Lexer", "Lexer", "class"),
//!     ],
//!     vec![Edge::new("parse", "Lexer", "uses")],
//! );
//!
//! let filtered = FilterConfig::new().apply(graph.nodes(), graph.edges());
//!
//! let mut output = Vec::new();
//! DotRenderer::new().render(&filtered, &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.starts_with("digraph CodeGraph {"));
//! assert!(dot_output.contains(r#""parse" -> "Lexer" [label="uses"];"#));
//! # Ok(())
//! # }
//! ```

mod renderer;
mod source;

pub use renderer::DotRenderer;
pub use source::CodeGraph;

use crate::core::{Edge, Node};

/// A provider of code graph data
///
/// Implementations decide where the data comes from (a query engine, a
/// file, an in-memory index); the exporter only needs both sequences in a
/// stable order.
pub trait GraphSource {
    /// All nodes, in insertion order
    fn nodes(&self) -> &[Node];

    /// All edges, in insertion order
    fn edges(&self) -> &[Edge];
}
