//! Breadth-first and depth-first traversal over an [`AdjacencyGraph`].
//!
//! Both traversals mark a node visited when it leaves the frontier, not when
//! it enters it, so a node may be queued several times and is still yielded
//! once. The only difference between them is the frontier discipline: BFS
//! pops from the front of a `VecDeque`, DFS from the back of a `Vec`.
//!
//! Undefined nodes (not keys of the graph) are never yielded. An undefined
//! start produces an empty traversal; neighbor references to undefined nodes
//! are dropped before they reach the frontier.

use crate::graph::adjacency::AdjacencyGraph;
use std::collections::{BTreeSet, VecDeque};

/// Storage discipline for nodes waiting to be visited.
pub trait Frontier<T>: Default {
    /// Adds a node to the frontier.
    fn put(&mut self, item: T);
    /// Removes the next node to visit.
    fn take(&mut self) -> Option<T>;
}

/// First in, first out.
impl<T> Frontier<T> for VecDeque<T> {
    fn put(&mut self, item: T) {
        self.push_back(item);
    }

    fn take(&mut self) -> Option<T> {
        self.pop_front()
    }
}

/// Last in, first out.
impl<T> Frontier<T> for Vec<T> {
    fn put(&mut self, item: T) {
        self.push(item);
    }

    fn take(&mut self) -> Option<T> {
        self.pop()
    }
}

/// A lazy traversal yielding each reachable defined node once, in the order
/// dictated by the frontier `F`.
pub struct Traversal<'g, N, F> {
    graph: &'g AdjacencyGraph<N>,
    visited: BTreeSet<&'g N>,
    frontier: F,
}

/// Breadth-first traversal iterator.
pub type Bfs<'g, N> = Traversal<'g, N, VecDeque<&'g N>>;

/// Depth-first traversal iterator.
pub type Dfs<'g, N> = Traversal<'g, N, Vec<&'g N>>;

impl<'g, N, F> Traversal<'g, N, F>
where
    N: Ord + Clone,
    F: Frontier<&'g N>,
{
    /// Starts a traversal of `graph` at `start`.
    pub fn new(graph: &'g AdjacencyGraph<N>, start: &N) -> Self {
        let mut frontier = F::default();
        if let Some(start) = graph.key(start) {
            frontier.put(start);
        }
        Self {
            graph,
            visited: BTreeSet::new(),
            frontier,
        }
    }

    /// Number of nodes yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

impl<'g, N, F> Iterator for Traversal<'g, N, F>
where
    N: Ord + Clone,
    F: Frontier<&'g N>,
{
    type Item = &'g N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.frontier.take()?;
            if !self.visited.insert(node) {
                continue;
            }
            for neighbor in self.graph.neighbors(node) {
                if self.graph.contains_node(neighbor) && !self.visited.contains(neighbor) {
                    self.frontier.put(neighbor);
                }
            }
            tracing::trace!(visited = self.visited.len(), "visited node");
            return Some(node);
        }
    }
}

/// Visits the nodes reachable from `start` in breadth-first order.
///
/// ```rust
/// use algokit::graph::{bfs, AdjacencyGraph};
///
/// let graph: AdjacencyGraph<u32> = [
///     (0, vec![1]),
///     (1, vec![0, 4]),
///     (2, vec![0, 4]),
///     (3, vec![0, 4]),
///     (4, vec![1, 2, 3]),
///     (5, vec![]),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(bfs(&graph, &0), vec![0, 1, 4, 2, 3]);
/// ```
pub fn bfs<N: Ord + Clone>(graph: &AdjacencyGraph<N>, start: &N) -> Vec<N> {
    Bfs::new(graph, start).cloned().collect()
}

/// Visits the nodes reachable from `start` in depth-first order.
///
/// Neighbors are pushed in list order, so the last-listed neighbor of a node
/// is explored first.
///
/// ```rust
/// use algokit::graph::{dfs, AdjacencyGraph};
///
/// let graph: AdjacencyGraph<u32> = [
///     (0, vec![1, 2]),
///     (1, vec![3]),
///     (2, vec![4]),
///     (3, vec![]),
///     (4, vec![]),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(dfs(&graph, &0), vec![0, 2, 4, 1, 3]);
/// ```
pub fn dfs<N: Ord + Clone>(graph: &AdjacencyGraph<N>, start: &N) -> Vec<N> {
    Dfs::new(graph, start).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdjacencyGraph<u32> {
        [
            (0, vec![1]),
            (1, vec![0, 4]),
            (2, vec![0, 4]),
            (3, vec![0, 4]),
            (4, vec![1, 2, 3]),
            (5, vec![]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_bfs_order() {
        assert_eq!(bfs(&sample(), &0), vec![0, 1, 4, 2, 3]);
        assert_eq!(bfs(&sample(), &5), vec![5]);
    }

    #[test]
    fn test_dfs_order() {
        assert_eq!(dfs(&sample(), &0), vec![0, 1, 4, 3, 2]);
    }

    #[test]
    fn test_undefined_start() {
        assert!(bfs(&sample(), &42).is_empty());
        assert!(dfs(&sample(), &42).is_empty());
    }

    #[test]
    fn test_self_loop_and_dangling_neighbor() {
        let g = AdjacencyGraph::new()
            .with_neighbors(1, vec![1, 7, 2])
            .with_neighbors(2, vec![1, 2]);
        assert_eq!(bfs(&g, &1), vec![1, 2]);
        assert_eq!(dfs(&g, &1), vec![1, 2]);
    }

    #[test]
    fn test_node_queued_twice_is_yielded_once() {
        // 3 is reachable through both 1 and 2 before it is dequeued.
        let g: AdjacencyGraph<u8> = [
            (0, vec![1, 2]),
            (1, vec![3]),
            (2, vec![3]),
            (3, vec![]),
        ]
        .into_iter()
        .collect();
        assert_eq!(bfs(&g, &0), vec![0, 1, 2, 3]);
        assert_eq!(dfs(&g, &0), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_iterator_is_lazy() {
        let g = sample();
        let mut it = Bfs::new(&g, &0);
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.visited_count(), 1);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.visited_count(), 2);
    }
}
