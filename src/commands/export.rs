//! Export command implementation

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::common::ConfigBuilder;
use crate::config::ExportOptions;
use crate::error::CodeGraphDotError;
use crate::filter::FilterConfig;

impl TryFrom<Cli> for ExportOptions {
    type Error = CodeGraphDotError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        ExportOptions::builder()
            .with_input(cli.input)
            .with_output(cli.output)
            .with_profile(cli.config)
            .with_filter(FilterConfig::from(cli.filter))
            .build()
    }
}

/// Execute the export command for writing a DOT graph
pub fn execute_export_command(cli: Cli) -> Result<()> {
    let config =
        ExportOptions::try_from(cli).wrap_err("Failed to parse export command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::export::ExportExecutor;
    ExportExecutor::execute(config)
}
