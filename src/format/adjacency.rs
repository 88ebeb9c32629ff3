//! Conversion between graphs and plain adjacency mappings.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::graph::{AdjacencyMap, UndirectedGraph};
use crate::types::GraphResult;

/// Payload-free view: node -> set of neighbors.
pub type AdjacencySets<N> = IndexMap<N, IndexSet<N>>;

/// Payload-rich view: node -> (neighbor -> payload).
pub type PayloadMap<N, E> = AdjacencyMap<N, E>;

impl<N: Eq + Hash + Clone, E> UndirectedGraph<N, E> {
    /// Export the payload-free adjacency view.
    ///
    /// Every node is a key, isolated ones included, and every edge shows up
    /// under both endpoints.
    pub fn to_adjacency_sets(&self) -> AdjacencySets<N> {
        self.adjacency()
            .iter()
            .map(|(node, neighbors)| (node.clone(), neighbors.keys().cloned().collect()))
            .collect()
    }

    /// Export an independent copy of the payload-rich adjacency map.
    pub fn to_adjacency_map(&self) -> PayloadMap<N, E>
    where
        E: Clone,
    {
        self.adjacency().clone()
    }
}

impl<N: Eq + Hash + Clone, E: Clone> UndirectedGraph<N, E> {
    /// Build a strict graph from `node -> neighbors` entries.
    ///
    /// Every key becomes a node. Edges get `E::default()` and are inserted
    /// idempotently, so an edge listed from both ends (or twice) is fine.
    /// A node listing itself is rejected with `InvalidEdge`.
    pub fn from_adjacency_sets<I, J>(data: I) -> GraphResult<Self, N>
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = N>,
        E: Default,
    {
        let mut graph = Self::new();
        for (node, neighbors) in data {
            graph.ensure_node(node.clone());
            for neighbor in neighbors {
                graph.merge_edge(node.clone(), neighbor, E::default())?;
            }
        }
        log::debug!(
            "Imported {} nodes and {} edges from adjacency sets",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Build a strict graph from `node -> (neighbor -> payload)` entries.
    ///
    /// Same rules as [`from_adjacency_sets`](Self::from_adjacency_sets);
    /// when a pair is listed twice the first payload seen is kept.
    pub fn from_adjacency_map<I, J>(data: I) -> GraphResult<Self, N>
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = (N, E)>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in data {
            graph.ensure_node(node.clone());
            for (neighbor, payload) in neighbors {
                graph.merge_edge(node.clone(), neighbor, payload)?;
            }
        }
        log::debug!(
            "Imported {} nodes and {} edges from adjacency map",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
