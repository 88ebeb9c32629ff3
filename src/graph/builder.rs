//! Fluent API for building UndirectedGraph instances.

use std::hash::Hash;

use crate::types::{GraphConfig, GraphResult, MutationPolicy};

use super::UndirectedGraph;

/// Fluent builder collecting nodes and edges before constructing a graph.
///
/// Nodes are inserted first, then edges, both through the configured
/// policy; the first rejected operation aborts the build.
pub struct GraphBuilder<N, E> {
    config: GraphConfig,
    nodes: Vec<N>,
    edges: Vec<(N, N, E)>,
}

impl<N, E> GraphBuilder<N, E> {
    /// Create a new builder with the default (strict) configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder with a specific configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Set the mutation policy.
    pub fn policy(&mut self, policy: MutationPolicy) -> &mut Self {
        self.config.policy = policy;
        self
    }

    /// Queue an isolated node.
    pub fn node(&mut self, node: N) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Queue several nodes.
    pub fn nodes<I: IntoIterator<Item = N>>(&mut self, nodes: I) -> &mut Self {
        self.nodes.extend(nodes);
        self
    }

    /// Queue an edge between `a` and `b`.
    pub fn edge(&mut self, a: N, b: N, payload: E) -> &mut Self {
        self.edges.push((a, b, payload));
        self
    }

    /// Number of queued nodes and edges.
    pub fn pending(&self) -> (usize, usize) {
        (self.nodes.len(), self.edges.len())
    }
}

impl<N: Eq + Hash + Clone, E: Clone> GraphBuilder<N, E> {
    /// Build the final UndirectedGraph.
    pub fn build(self) -> GraphResult<UndirectedGraph<N, E>, N> {
        let mut graph = UndirectedGraph::with_config(self.config);
        for node in self.nodes {
            graph.add_node(node)?;
        }
        for (a, b, payload) in self.edges {
            graph.add_edge(a, b, payload)?;
        }
        log::debug!(
            "Built {} graph with {} nodes and {} edges",
            graph.policy(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<N, E> Default for GraphBuilder<N, E> {
    fn default() -> Self {
        Self::new()
    }
}
