//! # `algokit` - Classic Algorithms Toolkit
//!
//! A small library of textbook array, string and graph algorithms, each
//! exposed as a stateless function with a documented contract. Nothing is
//! cached or shared between calls.
//!
//! ## Modules
//!
//! - `sorting` – bubble, selection, merge and quick sort (+ [`SortAlgorithm`])
//! - `searching` – closed-interval binary search
//! - `hashing` – duplicates, two-sum, anagrams, top-k, product-except-self,
//!   longest consecutive run
//! - `graph` – [`AdjacencyGraph`] with breadth-first and depth-first traversal
//! - `codec` – length-prefixed encoding of string lists
//! - `validation` – palindrome and sudoku checks
//! - `numeric` – memoized Fibonacci and primality
//!
//! ## Contracts
//!
//! ### Not found is not an error
//! Searches return `Option` and collection-producing routines return an
//! empty `Vec`. [`AlgoError`] is reserved for inputs that break a checked
//! precondition: an unsorted slice given to
//! [`checked_binary_search`](searching::checked_binary_search), a board that
//! is not 9×9, a corrupt encoded buffer.
//!
//! ### Mutation
//! `bubble_sort`, `selection_sort` and `quick_sort` sort their `&mut [T]` in
//! place. Every other routine borrows its input immutably and returns a new
//! value.
//!
//! ### Diagnostics
//! Routines emit `tracing` events at `trace`/`debug` level (visited nodes,
//! partition sizes, decode failures). Nothing is printed unless the caller
//! installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use algokit::graph::{bfs, AdjacencyGraph};
//! use algokit::hashing::{longest_consecutive_run, top_k};
//! use algokit::sorting::merge_sort;
//!
//! assert_eq!(merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
//! assert_eq!(longest_consecutive_run(&[100, 4, 200, 1, 3, 2]), 4);
//! assert_eq!(top_k(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
//!
//! let mut graph = AdjacencyGraph::new();
//! graph.add_edge("a", "b");
//! graph.add_edge("a", "c");
//! assert_eq!(bfs(&graph, &"a"), vec!["a", "b", "c"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod codec;
pub mod error;
pub mod graph;
pub mod hashing;
pub mod numeric;
pub mod searching;
pub mod sorting;
pub mod validation;

pub use codec::{Codec, CodecConfig};
pub use error::{AlgoError, Result};
pub use graph::AdjacencyGraph;
pub use sorting::SortAlgorithm;
pub use validation::SudokuBoard;
