//! Adjacency-list graph keyed by node identifier.

use crate::graph::traversal::{Bfs, Dfs};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A directed graph stored as `node -> ordered neighbor list`.
///
/// A node is *defined* iff it is a key of the map. Neighbor lists may name
/// undefined nodes (they are skipped by traversals), may repeat entries and
/// may contain the node itself. Neighbor order is preserved and drives
/// traversal order.
///
/// Serializes as a plain map, so `{"0": [1], "1": [0]}` in JSON is a valid
/// `AdjacencyGraph<u32>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "N: Serialize",
    deserialize = "N: Deserialize<'de> + Ord"
))]
pub struct AdjacencyGraph<N> {
    adjacency: BTreeMap<N, Vec<N>>,
}

impl<N: Ord + Clone> AdjacencyGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Defines `node` with no neighbors. Returns `false` if it already existed.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Appends the directed edge `from -> to`, defining both endpoints.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Replaces the neighbor list of `node`, defining it if needed.
    ///
    /// Unlike [`add_edge`](Self::add_edge), the neighbors are not defined as
    /// nodes.
    pub fn with_neighbors(mut self, node: N, neighbors: Vec<N>) -> Self {
        self.adjacency.insert(node, neighbors);
        self
    }

    /// Neighbors of `node` in insertion order; empty for undefined nodes.
    pub fn neighbors(&self, node: &N) -> &[N] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if `node` is a key of the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of defined nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of neighbor entries across all lists.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Defined nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Returns `true` if the graph defines no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// The stored key equal to `node`, borrowed for the graph's lifetime.
    pub(crate) fn key(&self, node: &N) -> Option<&N> {
        self.adjacency.get_key_value(node).map(|(k, _)| k)
    }

    /// Breadth-first order from `start`; see [`bfs`](crate::graph::bfs).
    pub fn bfs(&self, start: &N) -> Vec<N> {
        Bfs::new(self, start).cloned().collect()
    }

    /// Depth-first order from `start`; see [`dfs`](crate::graph::dfs).
    pub fn dfs(&self, start: &N) -> Vec<N> {
        Dfs::new(self, start).cloned().collect()
    }
}

impl<N: Ord + Clone> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ord + Clone> From<BTreeMap<N, Vec<N>>> for AdjacencyGraph<N> {
    fn from(adjacency: BTreeMap<N, Vec<N>>) -> Self {
        Self { adjacency }
    }
}

impl<N: Ord + Clone> FromIterator<(N, Vec<N>)> for AdjacencyGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}
