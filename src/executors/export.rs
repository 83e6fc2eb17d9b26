//! Export command executor

use std::collections::HashSet;

use console::style;
use miette::{Result, WrapErr};

use crate::config::{ExportOptions, FilterProfile};
use crate::executors::CommandExecutor;
use crate::exporter::DotExporter;
use crate::graph::CodeGraph;
use crate::utils::string::pluralize;

pub struct ExportExecutor;

impl CommandExecutor for ExportExecutor {
    type Config = ExportOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Exporting code graph to DOT...", style("📊").cyan());

        let filter = match config.profile.as_ref() {
            Some(profile_path) => FilterProfile::parse_file(profile_path)
                .wrap_err("Failed to load filter profile")?
                .filter
                .overridden_by(config.filter),
            None => config.filter,
        };

        let graph = match config.input.as_ref() {
            Some(input_path) => {
                eprintln!(
                    "  {} Source: {}",
                    style("→").dim(),
                    style(input_path.display()).bold()
                );
                CodeGraph::from_json_file(input_path).wrap_err("Failed to load graph")?
            }
            None => {
                eprintln!("  {} Source: built-in sample graph", style("→").dim());
                CodeGraph::sample()
            }
        };

        eprintln!(
            "  {} Node types: {}",
            style("→").dim(),
            describe_allow_list(filter.effective_node_types())
        );
        eprintln!(
            "  {} Edge labels: {}",
            style("→").dim(),
            describe_allow_list(filter.effective_edge_labels())
        );
        eprintln!(
            "  {} Limit: {}",
            style("→").dim(),
            filter
                .effective_limit()
                .map_or_else(|| "none".to_string(), |limit| limit.to_string())
        );

        let summary = DotExporter::new(filter)
            .export_to_file(&graph, &config.output)
            .wrap_err("Failed to export DOT graph")?;

        eprintln!(
            "{} Graph exported successfully to {}",
            style("✓").green(),
            style(config.output.display()).bold()
        );
        eprintln!(
            "  {} {} {}, {} {}",
            style("→").dim(),
            summary.nodes,
            pluralize("node", summary.nodes),
            summary.edges,
            pluralize("edge", summary.edges)
        );

        Ok(())
    }
}

/// Sorted, comma-separated allow-list, or "all" when unconstrained
fn describe_allow_list(allow_list: Option<&HashSet<String>>) -> String {
    match allow_list {
        Some(values) => {
            let mut values: Vec<&str> = values.iter().map(String::as_str).collect();
            values.sort_unstable();
            values.join(", ")
        }
        None => "all".to_string(),
    }
}
