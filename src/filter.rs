//! Graph filtering functionality
//!
//! Filtering runs as an ordered pipeline over borrowed nodes and edges:
//!
//! 1. keep nodes whose type is allow-listed
//! 2. keep edges whose label is allow-listed
//! 3. drop edges with an endpoint outside the surviving nodes
//! 4. truncate nodes to the limit and drop edges that lost an endpoint
//!
//! Every stage preserves input order and nothing is deduplicated.

use std::collections::HashSet;

use serde::Deserialize;

use crate::core::{Edge, Node};

/// Constraints applied to a graph before it is rendered
///
/// An allow-list that is absent or empty, and a limit that is absent or zero,
/// all mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    pub node_types: Option<HashSet<String>>,
    pub edge_labels: Option<HashSet<String>>,
    pub limit: Option<usize>,
}

/// The subset of a graph that survived filtering, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredGraph<'a> {
    pub nodes: Vec<&'a Node>,
    pub edges: Vec<&'a Edge>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_types<I, S>(mut self, node_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.node_types = Some(node_types.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_edge_labels<I, S>(mut self, edge_labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edge_labels = Some(edge_labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Node-type allow-list, if it constrains anything
    pub fn effective_node_types(&self) -> Option<&HashSet<String>> {
        self.node_types.as_ref().filter(|types| !types.is_empty())
    }

    /// Edge-label allow-list, if it constrains anything
    pub fn effective_edge_labels(&self) -> Option<&HashSet<String>> {
        self.edge_labels.as_ref().filter(|labels| !labels.is_empty())
    }

    /// Node cap, if it constrains anything
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|&limit| limit > 0)
    }

    /// Layer `overrides` on top of this config: every field set in
    /// `overrides` replaces the field here, unset fields are kept.
    pub fn overridden_by(self, overrides: FilterConfig) -> FilterConfig {
        FilterConfig {
            node_types: overrides.node_types.or(self.node_types),
            edge_labels: overrides.edge_labels.or(self.edge_labels),
            limit: overrides.limit.or(self.limit),
        }
    }

    /// Run the filter pipeline over `nodes` and `edges`
    pub fn apply<'a>(&self, nodes: &'a [Node], edges: &'a [Edge]) -> FilteredGraph<'a> {
        let mut nodes: Vec<&Node> = match self.effective_node_types() {
            Some(types) => nodes
                .iter()
                .filter(|node| types.contains(node.node_type.as_str()))
                .collect(),
            None => nodes.iter().collect(),
        };

        let mut edges: Vec<&Edge> = match self.effective_edge_labels() {
            Some(labels) => edges
                .iter()
                .filter(|edge| labels.contains(edge.label.as_str()))
                .collect(),
            None => edges.iter().collect(),
        };
        retain_connected(&mut edges, &nodes);

        if let Some(limit) = self.effective_limit() {
            nodes.truncate(limit);
            retain_connected(&mut edges, &nodes);
        }

        FilteredGraph { nodes, edges }
    }
}

/// Drop edges whose source or target is not among `nodes`
fn retain_connected(edges: &mut Vec<&Edge>, nodes: &[&Node]) {
    let valid_ids: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
    edges.retain(|edge| {
        valid_ids.contains(edge.source.as_str()) && valid_ids.contains(edge.target.as_str())
    });
}
