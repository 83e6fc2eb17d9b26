//! In-memory and file-backed graph sources

use std::path::Path;

use miette::NamedSource;
use serde::Deserialize;

use crate::core::{Edge, Node};
use crate::error::{CodeGraphDotError, GraphParseError, span_at};
use crate::graph::GraphSource;

/// An owned snapshot of a code graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CodeGraph {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl CodeGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// The demonstration graph: two functions and a class that contains one
    /// of them.
    pub fn sample() -> Self {
        Self::new(
            vec![
                Node::new("FuncA", "FuncA", "function"),
                Node::new("FuncB", "FuncB", "function"),
                Node::new("ClassX", "ClassX", "class"),
            ],
            vec![
                Edge::new("FuncA", "FuncB", "calls"),
                Edge::new("ClassX", "FuncA", "contains"),
            ],
        )
    }

    /// Load a graph from a JSON file with `nodes` and `edges` arrays.
    ///
    /// Either array may be omitted. Parse failures carry the file contents
    /// and the offending position for diagnostic rendering.
    pub fn from_json_file(path: &Path) -> Result<Self, CodeGraphDotError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CodeGraphDotError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::from_json_str(&content, &path.display().to_string())
    }

    /// Parse a graph from JSON text; `name` identifies the text in errors.
    pub fn from_json_str(content: &str, name: &str) -> Result<Self, CodeGraphDotError> {
        serde_json::from_str(content).map_err(|e| {
            CodeGraphDotError::GraphParseError(Box::new(GraphParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.to_string()),
                span: span_at(content, e.line(), e.column()),
                source: e,
            }))
        })
    }
}

impl GraphSource for CodeGraph {
    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
