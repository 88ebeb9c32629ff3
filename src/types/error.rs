//! Error types for the undirected graph container.

use thiserror::Error;

/// All errors that can occur while mutating or querying a graph.
///
/// Variants carry the offending node(s) so callers can decide how to react
/// without re-deriving which argument was at fault.
#[derive(Error, Debug)]
pub enum GraphError<N> {
    /// Strict node insertion hit a node that is already present.
    #[error("Node {0:?} already exists")]
    NodeExists(N),

    /// The operation requires a node that is not in the graph.
    #[error("Node {0:?} not found")]
    NodeNotFound(N),

    /// Strict edge insertion hit a pair that already carries a payload.
    #[error("Edge ({0:?}, {1:?}) already exists")]
    EdgeExists(N, N),

    /// No payload is stored for the pair.
    #[error("Edge ({0:?}, {1:?}) not found")]
    EdgeNotFound(N, N),

    /// Both endpoints of an edge operation are the same node.
    #[error("Self-edge not allowed on node {0:?}")]
    InvalidEdge(N),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl<N> GraphError<N> {
    /// Short, stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NodeExists(_) => "node_exists",
            Self::NodeNotFound(_) => "node_not_found",
            Self::EdgeExists(..) => "edge_exists",
            Self::EdgeNotFound(..) => "edge_not_found",
            Self::InvalidEdge(_) => "invalid_edge",
            Self::Json(_) => "json",
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T, N> = Result<T, GraphError<N>>;
