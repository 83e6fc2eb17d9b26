use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in filter profile '{file}'")]
#[diagnostic(
    code(codegraph_dot::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid graph file '{file}'")]
#[diagnostic(
    code(codegraph_dot::graph_parse_error),
    help("Graph files are JSON objects with a `nodes` array and an `edges` array")
)]
pub struct GraphParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("invalid JSON here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum CodeGraphDotError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(codegraph_dot::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write DOT output to '{path}'")]
    #[diagnostic(
        code(codegraph_dot::write_error),
        help("Check that the parent directory exists, that you have write permissions and that the disk is not full")
    )]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    GraphParseError(Box<GraphParseError>),

    #[error("IO error")]
    #[diagnostic(
        code(codegraph_dot::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(codegraph_dot::config_error),
        help("Check your command arguments and filter profile")
    )]
    ConfigurationError { message: String },
}

/// Convert a 1-based line/column pair into a zero-length span inside
/// `content`, clamped to the end of the text.
pub(crate) fn span_at(content: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(content.len());

    Some(SourceSpan::new(offset.into(), 0))
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "export.toml".to_string(),
            source_code: NamedSource::new("export.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(
            error.to_string(),
            "Invalid TOML syntax in filter profile 'export.toml'"
        );
    }

    #[test]
    fn test_graph_parse_error_display() {
        let source_code = "{\"nodes\": [}";
        let json_err = serde_json::from_str::<serde_json::Value>(source_code).unwrap_err();

        let error = GraphParseError {
            file: "graph.json".to_string(),
            source_code: NamedSource::new("graph.json", source_code.to_string()),
            span: span_at(source_code, json_err.line(), json_err.column()),
            source: json_err,
        };

        assert_eq!(error.to_string(), "Invalid graph file 'graph.json'");
        assert!(error.span.is_some());
    }

    #[test]
    fn test_write_failure_display() {
        let error = CodeGraphDotError::WriteFailure {
            path: PathBuf::from("/nonexistent/graph.dot"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };

        assert_eq!(
            error.to_string(),
            "Failed to write DOT output to '/nonexistent/graph.dot'"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = CodeGraphDotError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.json'");
    }

    #[test]
    fn test_configuration_error() {
        let error = CodeGraphDotError::ConfigurationError {
            message: "Missing required field: output".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: output"
        );
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = CodeGraphDotError::WriteFailure {
            path: PathBuf::from("graph.dot"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        };

        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let error: CodeGraphDotError = io::Error::other("some io error").into();

        match error {
            CodeGraphDotError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_span_at_points_into_later_lines() {
        let content = "{\n  \"nodes\": x\n}";
        let span = span_at(content, 2, 12).unwrap();

        assert_eq!(span.offset(), 13);
        assert_eq!(&content[span.offset()..span.offset() + 1], "x");
    }

    #[test]
    fn test_span_at_clamps_to_content() {
        let span = span_at("{}", 5, 40).unwrap();
        assert_eq!(span.offset(), 2);
        assert!(span_at("{}", 0, 0).is_none());
    }
}
