//! DOT export of filtered code graphs
//!
//! The exporter ties a [`FilterConfig`] to the [`DotRenderer`]: it reads a
//! [`GraphSource`], runs the filter pipeline and writes the surviving subset
//! to a sink, a string or a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CodeGraphDotError;
use crate::filter::FilterConfig;
use crate::graph::{DotRenderer, GraphSource};

/// Counts of what an export emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub nodes: usize,
    pub edges: usize,
}

#[derive(Debug, Clone, Default)]
pub struct DotExporter {
    filter: FilterConfig,
    renderer: DotRenderer,
}

impl DotExporter {
    pub fn new(filter: FilterConfig) -> Self {
        Self {
            filter,
            renderer: DotRenderer::new(),
        }
    }

    /// Filter `source` and write it as DOT to `output`
    pub fn export<S: GraphSource + ?Sized>(
        &self,
        source: &S,
        output: &mut dyn Write,
    ) -> Result<ExportSummary, CodeGraphDotError> {
        let filtered = self.filter.apply(source.nodes(), source.edges());
        self.renderer.render(&filtered, output)?;

        Ok(ExportSummary {
            nodes: filtered.nodes.len(),
            edges: filtered.edges.len(),
        })
    }

    /// Filter `source` and return it as a DOT document
    pub fn export_to_string<S: GraphSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<String, CodeGraphDotError> {
        let filtered = self.filter.apply(source.nodes(), source.edges());
        self.renderer.render_to_string(&filtered)
    }

    /// Filter `source` and write it as DOT to the file at `path`
    ///
    /// The file is created (or truncated) and closed before returning. Any
    /// failure to create, write or flush it is reported as
    /// [`CodeGraphDotError::WriteFailure`]; whatever was already written is
    /// left in place for the caller to deal with.
    pub fn export_to_file<S: GraphSource + ?Sized>(
        &self,
        source: &S,
        path: &Path,
    ) -> Result<ExportSummary, CodeGraphDotError> {
        let write_failure = |source: std::io::Error| CodeGraphDotError::WriteFailure {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(write_failure)?);

        let summary = self.export(source, &mut writer).map_err(|e| match e {
            CodeGraphDotError::Io(source) => write_failure(source),
            other => other,
        })?;

        // Dropping a BufWriter discards flush errors
        writer.flush().map_err(write_failure)?;

        Ok(summary)
    }
}
