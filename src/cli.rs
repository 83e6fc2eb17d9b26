use std::path::PathBuf;

use clap::Parser;

use crate::common::FilterArgs;

#[derive(Parser, Debug)]
#[command(
    name = "codegraph-dot",
    about = "📊 Export a code graph to Graphviz DOT format",
    long_about = "codegraph-dot writes the nodes (functions, classes, ...) and edges (calls, \
                  containment, ...) of a code graph as a Graphviz DOT file. Nodes can be \
                  restricted to a set of types and capped in number, edges to a set of labels; \
                  edges whose endpoints did not survive filtering are always dropped. Filter \
                  defaults can be kept in a TOML profile and overridden per run.",
    version
)]
pub struct Cli {
    /// Output file path for the .dot file
    #[arg(short, long, value_name = "PATH", env = crate::constants::env::OUTPUT)]
    pub output: PathBuf,

    /// JSON graph file with `nodes` and `edges` arrays (the built-in sample
    /// graph is exported if not specified)
    #[arg(short, long, value_name = "PATH", env = crate::constants::env::INPUT)]
    pub input: Option<PathBuf>,

    /// TOML filter profile; command-line filters override its values
    #[arg(short, long, value_name = "PATH", env = crate::constants::env::CONFIG)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}
