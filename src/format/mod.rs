//! Plain-mapping export/import and JSON hand-off for graphs.

pub mod adjacency;
pub mod json;

pub use adjacency::{AdjacencySets, PayloadMap};
