use std::borrow::Cow;
use std::io::Write;

use crate::constants::dot::{GRAPH_NAME, INDENT};
use crate::error::CodeGraphDotError;
use crate::filter::FilteredGraph;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(CodeGraphDotError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(CodeGraphDotError::from)
    };
}

/// Serializes a filtered graph as a Graphviz `digraph`
///
/// Nodes are declared first, then edges, each in the order the filter
/// produced them. Node labels read `<label>\n(<type>)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer;

impl DotRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        graph: &FilteredGraph<'_>,
        output: &mut dyn Write,
    ) -> Result<(), CodeGraphDotError> {
        writeln_out!(output, "digraph {GRAPH_NAME} {{")?;

        for node in &graph.nodes {
            writeln_out!(
                output,
                r#"{INDENT}"{}" [label="{}\n({})"];"#,
                escape(&node.id),
                escape(&node.label),
                escape(&node.node_type)
            )?;
        }

        for edge in &graph.edges {
            writeln_out!(
                output,
                r#"{INDENT}"{}" -> "{}" [label="{}"];"#,
                escape(&edge.source),
                escape(&edge.target),
                escape(&edge.label)
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    /// Render into an in-memory string
    pub fn render_to_string(&self, graph: &FilteredGraph<'_>) -> Result<String, CodeGraphDotError> {
        let mut output = Vec::new();
        self.render(graph, &mut output)?;
        // Every byte written came from a `str`
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

/// Make text safe inside a double-quoted DOT string
///
/// Text without quotes, backslashes or line breaks is returned unchanged.
/// Distinct inputs always stay distinct after escaping.
fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['"', '\\', '\n', '\r']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
