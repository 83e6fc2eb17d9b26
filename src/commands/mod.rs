//! Command implementations for the codegraph-dot CLI
//!
//! The tool has a single command, export: filter a code graph and write it
//! as a Graphviz DOT file.

pub mod export;

use miette::Result;

use crate::cli::Cli;

/// Execute a command based on CLI input
pub fn execute_command(cli: Cli) -> Result<()> {
    export::execute_export_command(cli)
}
