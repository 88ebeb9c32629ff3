//! Undirected graph container with per-edge payloads.
//!
//! Stores nodes of any hashable type `N` in a symmetric adjacency map
//! (`node -> {neighbor -> payload}`), supports strict or idempotent
//! mutation profiles, and yields depth-first / breadth-first orders that
//! cover every connected component.
//!
//! ```
//! use undirected_graph::{MutationPolicy, UndirectedGraph};
//!
//! let mut graph: UndirectedGraph<u32, f64> = UndirectedGraph::new();
//! assert_eq!(graph.policy(), MutationPolicy::Strict);
//! graph.add_node(1).unwrap();
//! graph.add_node(2).unwrap();
//! graph.add_edge(1, 2, 0.5).unwrap();
//! assert_eq!(graph.edge(&2, &1), Some(&0.5));
//! assert_eq!(graph.dfs().count(), 2);
//! ```

pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{AdjacencySets, PayloadMap};
pub use graph::{
    AdjacencyMap, Edges, GraphBuilder, NeighborMap, Traversal, TraversalOrder, UndirectedGraph,
};
pub use types::{GraphConfig, GraphError, GraphResult, MutationPolicy};
