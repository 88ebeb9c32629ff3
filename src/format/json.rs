//! serde support and JSON helpers.
//!
//! A graph serializes as its payload-rich adjacency map. Node values are
//! map keys, so with serde_json they must be strings or integers.

use std::fmt;
use std::hash::Hash;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::graph::UndirectedGraph;
use crate::types::GraphResult;

use super::PayloadMap;

impl<N, E> Serialize for UndirectedGraph<N, E>
where
    N: Serialize + Eq + Hash,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.adjacency().serialize(serializer)
    }
}

/// Symmetry is restored on the way in; self-loops are rejected.
impl<'de, N, E> Deserialize<'de> for UndirectedGraph<N, E>
where
    N: Deserialize<'de> + Eq + Hash + Clone + fmt::Debug,
    E: Deserialize<'de> + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = <PayloadMap<N, E> as Deserialize<'de>>::deserialize(deserializer)?;
        Self::from_adjacency_map(map).map_err(de::Error::custom)
    }
}

impl<N, E> UndirectedGraph<N, E>
where
    N: Eq + Hash + Clone,
{
    /// Encode the graph as a JSON object `{node: {neighbor: payload}}`.
    pub fn to_json(&self) -> GraphResult<String, N>
    where
        N: Serialize,
        E: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a graph from the object produced by [`to_json`](Self::to_json).
    ///
    /// Structural problems (self-loops) surface as their own error kind
    /// rather than as a JSON error.
    pub fn from_json(json: &str) -> GraphResult<Self, N>
    where
        N: DeserializeOwned,
        E: DeserializeOwned + Clone,
    {
        let map: PayloadMap<N, E> = serde_json::from_str(json)?;
        Self::from_adjacency_map(map)
    }
}
