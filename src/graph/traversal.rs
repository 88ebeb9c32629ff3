//! Graph traversal algorithms (DFS and BFS over every component).

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::iter::FusedIterator;

use super::undirected_graph::{NeighborMap, UndirectedGraph};

/// Visitation order of a [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Pop the most recently discovered node first (LIFO frontier).
    DepthFirst,
    /// Pop the earliest discovered node first (FIFO frontier).
    BreadthFirst,
}

/// Lazy traversal yielding every node of a graph exactly once.
///
/// Components are entered in node insertion order: whenever the frontier
/// runs dry, the next not-yet-visited node becomes a new root. Neighbors
/// are pushed before they are marked visited, so a node may sit in the
/// frontier several times; stale copies are discarded when popped.
///
/// The resulting order is a valid preorder DFS (or level order BFS) per
/// component. Sibling order is not canonical, but it is deterministic for
/// a fixed insertion history.
pub struct Traversal<'a, N, E> {
    graph: &'a UndirectedGraph<N, E>,
    roots: indexmap::map::Keys<'a, N, NeighborMap<N, E>>,
    visited: HashSet<&'a N>,
    frontier: VecDeque<&'a N>,
    order: TraversalOrder,
}

impl<'a, N: Eq + Hash, E> Traversal<'a, N, E> {
    pub(crate) fn new(graph: &'a UndirectedGraph<N, E>, order: TraversalOrder) -> Self {
        Self {
            graph,
            roots: graph.nodes(),
            visited: HashSet::with_capacity(graph.node_count()),
            frontier: VecDeque::new(),
            order,
        }
    }

    /// The order this traversal follows.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Number of nodes yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    fn pop(&mut self) -> Option<&'a N> {
        match self.order {
            TraversalOrder::DepthFirst => self.frontier.pop_back(),
            TraversalOrder::BreadthFirst => self.frontier.pop_front(),
        }
    }
}

impl<'a, N: Eq + Hash, E> Iterator for Traversal<'a, N, E> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = match self.pop() {
                Some(node) => node,
                None => {
                    let visited = &self.visited;
                    self.roots.by_ref().find(|root| !visited.contains(root))?
                }
            };

            if !self.visited.insert(node) {
                continue;
            }

            let graph = self.graph;
            if let Some(neighbors) = graph.adjacency().get(node) {
                for neighbor in neighbors.keys() {
                    if !self.visited.contains(&neighbor) {
                        self.frontier.push_back(neighbor);
                    }
                }
            }
            return Some(node);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.node_count() - self.visited.len();
        (remaining, Some(remaining))
    }
}

impl<N: Eq + Hash, E> ExactSizeIterator for Traversal<'_, N, E> {}

impl<N: Eq + Hash, E> FusedIterator for Traversal<'_, N, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(len: u32) -> UndirectedGraph<u32, ()> {
        UndirectedGraph::from_edges((1..len).map(|i| (i - 1, i, ()))).unwrap()
    }

    #[test]
    fn dfs_on_path_follows_the_path() {
        let graph = path(5);
        let order: Vec<u32> = graph.dfs().copied().collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn bfs_on_star_visits_center_then_leaves() {
        let graph = UndirectedGraph::from_edges([(0, 1, ()), (0, 2, ()), (0, 3, ())]).unwrap();
        let order: Vec<u32> = graph.bfs().copied().collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn dfs_goes_deep_before_wide() {
        // 0 - 1 - 3, 0 - 2
        let graph =
            UndirectedGraph::from_edges([(0, 1, ()), (0, 2, ()), (1, 3, ())]).unwrap();
        let order: Vec<u32> = graph.dfs().copied().collect();
        // last pushed neighbor of 0 is 2, so it is popped first
        assert_eq!(order, vec![0, 2, 1, 3]);
        let order: Vec<u32> = graph.bfs().copied().collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn size_hint_tracks_remaining_nodes() {
        let graph = path(4);
        let mut dfs = graph.dfs();
        assert_eq!(dfs.len(), 4);
        dfs.next();
        assert_eq!(dfs.len(), 3);
        assert_eq!(dfs.visited_count(), 1);
        assert_eq!(dfs.by_ref().count(), 3);
        assert_eq!(dfs.next(), None);
    }

    #[test]
    fn traverse_dispatches_on_order() {
        let graph = path(3);
        assert_eq!(
            graph.traverse(TraversalOrder::DepthFirst).order(),
            TraversalOrder::DepthFirst
        );
        assert_eq!(
            graph.traverse(TraversalOrder::BreadthFirst).collect::<Vec<_>>(),
            graph.bfs().collect::<Vec<_>>()
        );
    }
}
