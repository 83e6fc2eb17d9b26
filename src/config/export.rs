//! Export command configuration

use std::path::PathBuf;

use crate::filter::FilterConfig;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// JSON graph file; the sample graph is used when `None`
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    /// TOML filter profile layered beneath `filter`
    pub profile: Option<PathBuf>,
    pub filter: FilterConfig,
}

impl ExportOptions {
    pub fn builder() -> ExportOptionsBuilder {
        ExportOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct ExportOptionsBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    profile: Option<PathBuf>,
    filter: Option<FilterConfig>,
}

impl ExportOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input;
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_profile(mut self, profile: Option<PathBuf>) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl crate::common::ConfigBuilder for ExportOptionsBuilder {
    type Config = ExportOptions;

    fn build(self) -> Result<Self::Config, crate::error::CodeGraphDotError> {
        let output = self.output.ok_or_else(|| {
            crate::error::CodeGraphDotError::ConfigurationError {
                message: "Missing required field: output".to_string(),
            }
        })?;

        if output.as_os_str().is_empty() {
            return Err(crate::error::CodeGraphDotError::ConfigurationError {
                message: "Output path must not be empty".to_string(),
            });
        }

        Ok(ExportOptions {
            input: self.input,
            output,
            profile: self.profile,
            filter: self.filter.unwrap_or_default(),
        })
    }
}
