//! Adjacency-list graphs and their traversals.
//!
//! - `adjacency`: the [`AdjacencyGraph`] representation
//! - `traversal`: [`Bfs`] / [`Dfs`] iterators and the collecting [`bfs`] / [`dfs`]

pub mod adjacency;
pub mod traversal;

pub use adjacency::AdjacencyGraph;
pub use traversal::{bfs, dfs, Bfs, Dfs, Frontier, Traversal};
