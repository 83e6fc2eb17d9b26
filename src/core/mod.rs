//! Core data types and structures
//!
//! This module contains the node and edge types shared by graph sources, the
//! filter pipeline and the DOT renderer.

pub mod types;

pub use types::*;
