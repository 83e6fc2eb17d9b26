//! Configuration constants for codegraph-dot
//!
//! Fixed tokens of the DOT output and the environment variables the CLI
//! reads its flags from.

/// DOT output configuration
pub mod dot {
    /// Name of the emitted `digraph`
    pub const GRAPH_NAME: &str = "CodeGraph";

    /// Indentation of every node and edge statement
    pub const INDENT: &str = "  ";
}

/// Environment variables mirroring the command-line flags
pub mod env {
    pub const OUTPUT: &str = "CODEGRAPH_DOT_OUTPUT";
    pub const INPUT: &str = "CODEGRAPH_DOT_INPUT";
    pub const CONFIG: &str = "CODEGRAPH_DOT_CONFIG";
    pub const LIMIT: &str = "CODEGRAPH_DOT_LIMIT";
    /// Comma-separated, like `function,class`
    pub const NODE_TYPES: &str = "CODEGRAPH_DOT_NODE_TYPES";
    /// Comma-separated, like `calls,contains`
    pub const EDGE_LABELS: &str = "CODEGRAPH_DOT_EDGE_LABELS";
}
