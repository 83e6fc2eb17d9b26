//! TOML filter profiles
//!
//! A profile keeps filter defaults out of the command line:
//!
//! ```toml
//! [filter]
//! node_types = ["function", "class"]
//! edge_labels = ["calls"]
//! limit = 100
//! ```

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::error::{CodeGraphDotError, TomlParseError};
use crate::filter::FilterConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterProfile {
    #[serde(default)]
    pub filter: FilterConfig,
}

impl FilterProfile {
    pub fn parse_file(path: &Path) -> Result<Self, CodeGraphDotError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CodeGraphDotError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&content, &path.display().to_string())
    }

    pub fn parse_str(content: &str, name: &str) -> Result<Self, CodeGraphDotError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            CodeGraphDotError::TomlParseError(Box::new(TomlParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source: e,
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_full_profile() {
        let toml_content = r#"
[filter]
node_types = ["function", "class"]
edge_labels = ["calls"]
limit = 100
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let profile = FilterProfile::parse_file(file.path()).unwrap();

        assert_eq!(
            profile.filter,
            FilterConfig::new()
                .with_node_types(["function", "class"])
                .with_edge_labels(["calls"])
                .with_limit(100)
        );
    }

    #[test]
    fn test_empty_profile_is_unconstrained() {
        let profile = FilterProfile::parse_str("", "empty.toml").unwrap();

        assert_eq!(profile, FilterProfile::default());
    }

    #[test]
    fn test_partial_filter_section() {
        let profile = FilterProfile::parse_str("[filter]\nlimit = 0\n", "p.toml").unwrap();

        assert_eq!(profile.filter.limit, Some(0));
        assert_eq!(profile.filter.effective_limit(), None);
        assert!(profile.filter.node_types.is_none());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = FilterProfile::parse_str("[filter]\nnode_type = [\"class\"]\n", "typo.toml")
            .unwrap_err();

        assert!(matches!(
            err,
            CodeGraphDotError::TomlParseError(ref parse) if parse.file == "typo.toml"
        ));
    }

    #[test]
    fn test_syntax_error_carries_span() {
        let err = FilterProfile::parse_str("[filter\nlimit = 1\n", "broken.toml").unwrap_err();

        match err {
            CodeGraphDotError::TomlParseError(parse) => assert!(parse.span.is_some()),
            other => panic!("Expected TomlParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_limit_is_rejected() {
        assert!(FilterProfile::parse_str("[filter]\nlimit = -3\n", "neg.toml").is_err());
    }

    #[test]
    fn test_missing_profile_is_read_error() {
        let err = FilterProfile::parse_file(Path::new("/nonexistent/export.toml")).unwrap_err();

        assert!(matches!(err, CodeGraphDotError::FileReadError { .. }));
    }
}
