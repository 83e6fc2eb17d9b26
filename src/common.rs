//! Common functionality shared by the CLI and configuration layers

use clap::Args;

use crate::filter::FilterConfig;

/// Filter arguments of the export command
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Limit number of nodes to export (0 exports all)
    #[arg(short, long, value_name = "N", env = crate::constants::env::LIMIT)]
    pub limit: Option<usize>,

    /// Filter by node types (e.g. function class variable)
    #[arg(
        long,
        value_name = "TYPE",
        num_args = 0..,
        value_delimiter = ',',
        env = crate::constants::env::NODE_TYPES
    )]
    pub node_types: Option<Vec<String>>,

    /// Filter by edge labels (e.g. calls inherits contains)
    #[arg(
        long,
        value_name = "LABEL",
        num_args = 0..,
        value_delimiter = ',',
        env = crate::constants::env::EDGE_LABELS
    )]
    pub edge_labels: Option<Vec<String>>,
}

impl From<FilterArgs> for FilterConfig {
    fn from(args: FilterArgs) -> Self {
        FilterConfig {
            node_types: args.node_types.map(|types| types.into_iter().collect()),
            edge_labels: args.edge_labels.map(|labels| labels.into_iter().collect()),
            limit: args.limit,
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::CodeGraphDotError>;
}
