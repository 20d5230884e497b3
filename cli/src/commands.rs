//! One handler per subcommand.

use crate::output::{print_output, OutputFormat};
use algokit::graph::AdjacencyGraph;
use algokit::validation::SudokuBoard;
use algokit::{hashing, numeric, searching, validation, Codec, CodecConfig, SortAlgorithm};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Framing overrides shared by `encode` and `decode`.
#[derive(clap::Args, Debug)]
pub struct Framing {
    /// Character starting each record
    #[arg(long)]
    delimiter: Option<char>,

    /// Character ending each length
    #[arg(long)]
    terminator: Option<char>,
}

impl Framing {
    /// Overlays the flags that were given on `base`.
    pub fn apply(&self, base: CodecConfig) -> CodecConfig {
        CodecConfig {
            delimiter: self.delimiter.unwrap_or(base.delimiter),
            terminator: self.terminator.unwrap_or(base.terminator),
        }
    }
}

#[derive(Serialize)]
struct Sorted {
    algorithm: SortAlgorithm,
    stable: bool,
    values: Vec<f64>,
}

pub fn sort(mut values: Vec<f64>, algorithm: SortAlgorithm, format: OutputFormat) -> Result<()> {
    tracing::debug!(%algorithm, len = values.len(), "sorting");
    algorithm.sort_by(&mut values, f64::total_cmp);
    match format {
        OutputFormat::Text => print_output(&values, format),
        OutputFormat::Json => print_output(
            &Sorted {
                algorithm,
                stable: algorithm.is_stable(),
                values,
            },
            format,
        ),
    }
}

pub fn search(values: &[i64], target: i64, format: OutputFormat) -> Result<()> {
    let found = searching::checked_binary_search(values, &target)
        .context("search needs values in ascending order")?;
    print_output(&found, format)
}

pub fn duplicates(values: &[i64], format: OutputFormat) -> Result<()> {
    print_output(&hashing::has_duplicate(values), format)
}

pub fn two_sum(values: &[i64], target: i64, format: OutputFormat) -> Result<()> {
    print_output(&hashing::two_sum(values, target), format)
}

pub fn two_sum_sorted(values: &[i64], target: i64, format: OutputFormat) -> Result<()> {
    if !searching::is_sorted(values) {
        bail!("two-sum-sorted needs values in ascending order");
    }
    print_output(&hashing::two_sum_sorted(values, target), format)
}

pub fn anagram(first: &str, second: &str, format: OutputFormat) -> Result<()> {
    print_output(&hashing::is_anagram(first, second), format)
}

pub fn group_anagrams(words: &[String], format: OutputFormat) -> Result<()> {
    print_output(&hashing::group_anagrams(words), format)
}

pub fn top_k(values: &[i64], k: usize, format: OutputFormat) -> Result<()> {
    print_output(&hashing::top_k(values, k), format)
}

pub fn product(values: &[i64], format: OutputFormat) -> Result<()> {
    let products = hashing::checked_product_except_self(values)
        .context("products do not fit in a 64-bit integer")?;
    print_output(&products, format)
}

pub fn longest_run(values: &[i64], format: OutputFormat) -> Result<()> {
    print_output(&hashing::longest_consecutive_run(values), format)
}

/// Reads a graph such as `{"0": [1], "1": [0, 4]}`.
pub fn load_graph(path: &Path) -> Result<AdjacencyGraph<i64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read graph {}", path.display()))?;
    let graph: AdjacencyGraph<i64> = serde_json::from_str(&text)
        .with_context(|| format!("invalid graph {}", path.display()))?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

pub fn traverse(path: &Path, start: i64, depth_first: bool, format: OutputFormat) -> Result<()> {
    let graph = load_graph(path)?;
    if !graph.contains_node(&start) {
        tracing::warn!(start, "start node is not in the graph");
    }
    let order = if depth_first {
        graph.dfs(&start)
    } else {
        graph.bfs(&start)
    };
    print_output(&order, format)
}

pub fn encode(items: &[String], config: CodecConfig, format: OutputFormat) -> Result<()> {
    let codec = Codec::new(config).context("invalid codec framing")?;
    print_output(&codec.encode(items), format)
}

pub fn decode(buffer: &str, config: CodecConfig, format: OutputFormat) -> Result<()> {
    let codec = Codec::new(config).context("invalid codec framing")?;
    let items = codec.decode(buffer).context("failed to decode buffer")?;
    print_output(&items, format)
}

pub fn palindrome(text: &str, format: OutputFormat) -> Result<()> {
    print_output(&validation::is_palindrome(text), format)
}

pub fn sudoku(file: Option<&Path>, rows: &[String], format: OutputFormat) -> Result<()> {
    let board = match file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read board {}", path.display()))?;
            serde_json::from_str::<SudokuBoard>(&text)
                .with_context(|| format!("invalid board {}", path.display()))?
        }
        None if rows.is_empty() => bail!("give either --file or nine rows"),
        None => SudokuBoard::from_strs(rows).context("invalid board")?,
    };
    print_output(&board.is_valid(), format)
}

pub fn fib(n: u64, format: OutputFormat) -> Result<()> {
    let value = numeric::fibonacci(n).with_context(|| format!("fib({n})"))?;
    print_output(&value, format)
}

pub fn prime(n: u64, format: OutputFormat) -> Result<()> {
    print_output(&numeric::is_prime(n), format)
}
