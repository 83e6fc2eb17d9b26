//! # Configuration Module
//!
//! This module provides the configuration structures of the export command.
//!
//! - **ExportOptions**: Everything one export run needs, assembled through a
//!   builder from the parsed command line
//! - **FilterProfile**: Filter defaults loaded from a TOML file, which the
//!   command-line filters override field by field
//!
//! ## Example
//!
//! ```
//! use std::path::PathBuf;
//!
//! use codegraph_dot::common::ConfigBuilder;
//! use codegraph_dot::config::{ExportOptions, FilterProfile};
//! use codegraph_dot::filter::FilterConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ExportOptions::builder()
//!     .with_output(PathBuf::from("graph.dot"))
//!     .with_filter(FilterConfig::new().with_limit(10))
//!     .build()?;
//!
//! let profile = FilterProfile::parse_str("[filter]\nnode_types = [\"function\"]\n", "inline")?;
//! let filter = profile.filter.overridden_by(options.filter);
//!
//! assert_eq!(filter.effective_limit(), Some(10));
//! assert!(filter.effective_node_types().is_some());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod profile;

pub use export::ExportOptions;
pub use profile::FilterProfile;
