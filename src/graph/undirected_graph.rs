//! Core graph structure: a symmetric adjacency map with per-edge payloads.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::types::{GraphConfig, GraphError, GraphResult, MutationPolicy};

use super::traversal::{Traversal, TraversalOrder};

/// Neighbor -> payload map of a single node.
pub type NeighborMap<N, E> = IndexMap<N, E>;

/// Node -> neighbor map; the sole backing store of a graph.
pub type AdjacencyMap<N, E> = IndexMap<N, NeighborMap<N, E>>;

/// A simple undirected graph: no self-loops, at most one edge per node pair.
///
/// Every edge payload is stored under both endpoints, so `a -> b` holds `p`
/// exactly when `b -> a` holds `p`. Node and neighbor iteration follow
/// insertion order of the surviving entries.
///
/// ### Complexity
/// | Operation | Complexity |
/// |-----------|------------|
/// | `contains`, `has_edge`, `degree` | \(O(1)\) |
/// | `add_node`, `add_edge`, `update_edge` | \(O(1)\) amortized |
/// | `remove_edge` | \(O(\deg a + \deg b)\) |
/// | `remove_node` | \(O(n + \sum \deg)\) |
/// | `edges`, `dfs`, `bfs` | \(O(n + m)\) |
#[derive(Debug, Clone)]
pub struct UndirectedGraph<N, E> {
    adjacency: AdjacencyMap<N, E>,
    edge_count: usize,
    config: GraphConfig,
}

impl<N, E> Default for UndirectedGraph<N, E> {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<N, E> UndirectedGraph<N, E> {
    /// Create an empty graph with the strict mutation policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph using the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adjacency: IndexMap::new(),
            edge_count: 0,
            config,
        }
    }

    /// Create an empty strict graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(nodes),
            edge_count: 0,
            config: GraphConfig::default(),
        }
    }

    /// The configuration this graph was created with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// The mutation policy in effect.
    pub fn policy(&self) -> MutationPolicy {
        self.config.policy
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> indexmap::map::Keys<'_, N, NeighborMap<N, E>> {
        self.adjacency.keys()
    }

    /// Remove all nodes and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edge_count = 0;
        log::debug!("Cleared graph");
    }

    /// Exchange nodes and edges with `other` without copying them.
    ///
    /// Each instance keeps its own configuration.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.adjacency, &mut other.adjacency);
        std::mem::swap(&mut self.edge_count, &mut other.edge_count);
        log::debug!(
            "Swapped graph contents ({} <-> {} nodes)",
            other.adjacency.len(),
            self.adjacency.len()
        );
    }

    /// Borrow the backing adjacency map.
    pub fn adjacency(&self) -> &AdjacencyMap<N, E> {
        &self.adjacency
    }
}

impl<N: Eq + Hash, E> UndirectedGraph<N, E> {
    /// True if `node` is present.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// True if `a` is present and has `b` as a neighbor.
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains_key(b))
    }

    /// Payload of the edge between `a` and `b`, if any.
    pub fn edge(&self, a: &N, b: &N) -> Option<&E> {
        self.adjacency.get(a)?.get(b)
    }

    /// Iterate over every edge exactly once as `(u, v, payload)`.
    ///
    /// Order is deterministic for a fixed insertion history but otherwise
    /// unspecified; a pair never shows up in both orientations.
    pub fn edges(&self) -> Edges<'_, N, E> {
        Edges {
            outer: self.adjacency.iter(),
            current: None,
            seen: HashSet::with_capacity(self.edge_count),
            remaining: self.edge_count,
        }
    }

    /// Depth-first order over every node, component by component.
    pub fn dfs(&self) -> Traversal<'_, N, E> {
        Traversal::new(self, TraversalOrder::DepthFirst)
    }

    /// Breadth-first order over every node, component by component.
    pub fn bfs(&self) -> Traversal<'_, N, E> {
        Traversal::new(self, TraversalOrder::BreadthFirst)
    }

    /// Traverse every node in the given order.
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, N, E> {
        Traversal::new(self, order)
    }

    /// Audit every structural invariant.
    ///
    /// # Panics
    /// Panics if the adjacency map holds a self-loop, a one-sided edge, a
    /// neighbor that is not itself a node, mismatched payloads, or if the
    /// edge counter disagrees with the stored degrees.
    pub fn assert_consistent(&self)
    where
        E: PartialEq,
    {
        let mut degree_sum = 0usize;
        for (node, neighbors) in &self.adjacency {
            assert!(
                !neighbors.contains_key(node),
                "self-loop stored in adjacency map"
            );
            for (neighbor, payload) in neighbors {
                let Some(back) = self.adjacency.get(neighbor) else {
                    panic!("neighbor missing from adjacency map");
                };
                let mirrored = back.get(node);
                assert!(mirrored.is_some(), "one-sided edge in adjacency map");
                assert!(mirrored == Some(payload), "asymmetric edge payload");
            }
            degree_sum += neighbors.len();
        }
        assert_eq!(degree_sum, 2 * self.edge_count, "edge counter out of sync");
    }
}

impl<N: Eq + Hash + Clone, E> UndirectedGraph<N, E> {
    /// Add an isolated node.
    ///
    /// Returns `true` if the node was inserted. Under the strict policy an
    /// existing node is an error; under the idempotent policy it is a no-op
    /// returning `false`.
    pub fn add_node(&mut self, node: N) -> GraphResult<bool, N> {
        if self.adjacency.contains_key(&node) {
            return match self.config.policy {
                MutationPolicy::Strict => Err(GraphError::NodeExists(node)),
                MutationPolicy::Idempotent => Ok(false),
            };
        }
        self.adjacency.insert(node, IndexMap::new());
        Ok(true)
    }

    /// Remove a node and all incident edges.
    ///
    /// Returns the dropped edges as `(neighbor, payload)` pairs.
    pub fn remove_node(&mut self, node: &N) -> GraphResult<Vec<(N, E)>, N> {
        let incident = self
            .adjacency
            .shift_remove(node)
            .ok_or_else(|| GraphError::NodeNotFound(node.clone()))?;

        for neighbor in incident.keys() {
            let mirrored = self
                .adjacency
                .get_mut(neighbor)
                .and_then(|neighbors| neighbors.shift_remove(node));
            debug_assert!(mirrored.is_some(), "one-sided edge removed with node");
        }
        self.edge_count -= incident.len();

        log::debug!(
            "Removed node with {} incident edges; {} nodes, {} edges left",
            incident.len(),
            self.adjacency.len(),
            self.edge_count
        );
        Ok(incident.into_iter().collect())
    }

    /// Remove the edge between `a` and `b`, returning its payload.
    pub fn remove_edge(&mut self, a: &N, b: &N) -> GraphResult<E, N> {
        self.check_endpoints(a, b)?;
        let payload = self.adjacency[a]
            .shift_remove(b)
            .ok_or_else(|| GraphError::EdgeNotFound(a.clone(), b.clone()))?;
        let mirrored = self.adjacency[b].shift_remove(a);
        debug_assert!(mirrored.is_some(), "one-sided edge removed");
        self.edge_count -= 1;

        log::trace!("Removed edge; {} edges left", self.edge_count);
        Ok(payload)
    }

    /// Number of neighbors of `node`.
    pub fn degree(&self, node: &N) -> GraphResult<usize, N> {
        self.adjacency
            .get(node)
            .map(IndexMap::len)
            .ok_or_else(|| GraphError::NodeNotFound(node.clone()))
    }

    /// Iterate over the neighbors of `node`.
    pub fn neighbors(&self, node: &N) -> GraphResult<indexmap::map::Keys<'_, N, E>, N> {
        self.adjacency
            .get(node)
            .map(IndexMap::keys)
            .ok_or_else(|| GraphError::NodeNotFound(node.clone()))
    }

    /// Iterate over `(neighbor, payload)` pairs of the edges at `node`.
    pub fn incident_edges(&self, node: &N) -> GraphResult<indexmap::map::Iter<'_, N, E>, N> {
        self.adjacency
            .get(node)
            .map(IndexMap::iter)
            .ok_or_else(|| GraphError::NodeNotFound(node.clone()))
    }

    /// Shared validation of edge operations: self-loop first, then presence
    /// of `a`, then presence of `b`.
    fn check_endpoints(&self, a: &N, b: &N) -> GraphResult<(), N> {
        if a == b {
            return Err(GraphError::InvalidEdge(a.clone()));
        }
        if !self.adjacency.contains_key(a) {
            return Err(GraphError::NodeNotFound(a.clone()));
        }
        if !self.adjacency.contains_key(b) {
            return Err(GraphError::NodeNotFound(b.clone()));
        }
        Ok(())
    }

    /// Insert `node` unless present; returns `true` on insertion.
    pub(crate) fn ensure_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, IndexMap::new());
        true
    }
}

impl<N: Eq + Hash + Clone, E: Clone> UndirectedGraph<N, E> {
    /// Build a strict graph from an edge list.
    ///
    /// Endpoints are created on demand and an edge listed more than once
    /// keeps its first payload. Self-loops are rejected.
    pub fn from_edges<I>(edges: I) -> GraphResult<Self, N>
    where
        I: IntoIterator<Item = (N, N, E)>,
    {
        let mut graph = Self::new();
        for (a, b, payload) in edges {
            graph.merge_edge(a, b, payload)?;
        }
        Ok(graph)
    }

    /// Add an edge between `a` and `b` carrying `payload`.
    ///
    /// Returns `true` if an edge was inserted. Strict policy: both endpoints
    /// must exist and the pair must be free. Idempotent policy: missing
    /// endpoints are created and an existing edge is left untouched.
    pub fn add_edge(&mut self, a: N, b: N, payload: E) -> GraphResult<bool, N> {
        match self.config.policy {
            MutationPolicy::Strict => {
                self.check_endpoints(&a, &b)?;
                if self.has_edge(&a, &b) {
                    return Err(GraphError::EdgeExists(a, b));
                }
                self.link(a, b, payload);
                Ok(true)
            }
            MutationPolicy::Idempotent => self.merge_edge(a, b, payload),
        }
    }

    /// Insert or overwrite the edge between `a` and `b`.
    ///
    /// Endpoint handling follows the policy as in [`add_edge`](Self::add_edge).
    /// Returns the previous payload when an edge was overwritten.
    pub fn assign_edge(&mut self, a: N, b: N, payload: E) -> GraphResult<Option<E>, N> {
        match self.config.policy {
            MutationPolicy::Strict => self.check_endpoints(&a, &b)?,
            MutationPolicy::Idempotent => {
                if a == b {
                    return Err(GraphError::InvalidEdge(a));
                }
                self.ensure_node(a.clone());
                self.ensure_node(b.clone());
            }
        }

        if self.has_edge(&a, &b) {
            Ok(self.overwrite(&a, &b, payload))
        } else {
            self.link(a, b, payload);
            Ok(None)
        }
    }

    /// Replace the payload of an existing edge, returning the old one.
    pub fn update_edge(&mut self, a: &N, b: &N, payload: E) -> GraphResult<E, N> {
        self.check_endpoints(a, b)?;
        if !self.has_edge(a, b) {
            return Err(GraphError::EdgeNotFound(a.clone(), b.clone()));
        }
        self.overwrite(a, b, payload)
            .ok_or_else(|| GraphError::EdgeNotFound(a.clone(), b.clone()))
    }

    /// Idempotent edge insertion regardless of the configured policy.
    pub(crate) fn merge_edge(&mut self, a: N, b: N, payload: E) -> GraphResult<bool, N> {
        if a == b {
            return Err(GraphError::InvalidEdge(a));
        }
        if self.has_edge(&a, &b) {
            return Ok(false);
        }
        self.ensure_node(a.clone());
        self.ensure_node(b.clone());
        self.link(a, b, payload);
        Ok(true)
    }

    /// Store a new edge under both endpoints. Both must exist.
    fn link(&mut self, a: N, b: N, payload: E) {
        self.adjacency[&a].insert(b.clone(), payload.clone());
        self.adjacency[&b].insert(a, payload);
        self.edge_count += 1;
        log::trace!("Inserted edge; {} edges total", self.edge_count);
    }

    /// Overwrite the payload under both endpoints of an existing edge.
    fn overwrite(&mut self, a: &N, b: &N, payload: E) -> Option<E> {
        let previous = self.adjacency[a].insert(b.clone(), payload.clone());
        let mirrored = self.adjacency[b].insert(a.clone(), payload);
        debug_assert!(
            previous.is_some() && mirrored.is_some(),
            "overwrite of a one-sided edge"
        );
        log::trace!("Updated edge payload");
        previous
    }
}

/// Structural equality: same nodes, same neighbor sets, same payloads.
/// Iteration order and configuration are not compared.
impl<N: Eq + Hash, E: PartialEq> PartialEq for UndirectedGraph<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<N: Eq + Hash, E: Eq> Eq for UndirectedGraph<N, E> {}

impl<N: Eq + Hash + fmt::Debug, E: fmt::Debug> fmt::Display for UndirectedGraph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UndirectedGraph")?;
        f.debug_list().entries(self.edges()).finish()
    }
}

impl<'a, N, E> IntoIterator for &'a UndirectedGraph<N, E> {
    type Item = &'a N;
    type IntoIter = indexmap::map::Keys<'a, N, NeighborMap<N, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}

/// Iterator over each undirected edge once, created by
/// [`UndirectedGraph::edges`].
pub struct Edges<'a, N, E> {
    outer: indexmap::map::Iter<'a, N, NeighborMap<N, E>>,
    current: Option<(&'a N, indexmap::map::Iter<'a, N, E>)>,
    /// Ordered pairs `(v, u)` recorded when `(u, v)` is emitted.
    seen: HashSet<(&'a N, &'a N)>,
    remaining: usize,
}

impl<'a, N: Eq + Hash, E> Iterator for Edges<'a, N, E> {
    type Item = (&'a N, &'a N, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((u, inner)) = self.current.as_mut() {
                let u = *u;
                for (v, payload) in inner.by_ref() {
                    if self.seen.contains(&(u, v)) {
                        continue;
                    }
                    self.seen.insert((v, u));
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some((u, v, payload));
                }
            }
            let (u, neighbors) = self.outer.next()?;
            self.current = Some((u, neighbors.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N: Eq + Hash, E> ExactSizeIterator for Edges<'_, N, E> {}

impl<N: Eq + Hash, E> std::iter::FusedIterator for Edges<'_, N, E> {}
