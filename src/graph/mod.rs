//! In-memory graph operations: the container, its traversals and a builder.

pub mod builder;
pub mod traversal;
pub mod undirected_graph;

pub use builder::GraphBuilder;
pub use traversal::{Traversal, TraversalOrder};
pub use undirected_graph::{AdjacencyMap, Edges, NeighborMap, UndirectedGraph};
