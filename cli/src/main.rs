//! algokit CLI - run the library's algorithms from the command line.
//!
//! Each subcommand wraps one routine. Inputs are positional literals, except
//! graphs and sudoku boards which are read from JSON files. `demo` replays a
//! fixed set of inputs through every routine.

mod commands;
mod config;
mod demo;
mod output;

use algokit::SortAlgorithm;
use anyhow::Result;
use clap::{Parser, Subcommand};
use config::CliConfig;
use output::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Classic algorithms toolkit.
#[derive(Parser)]
#[command(name = "algokit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// JSON file with default sort algorithm and codec framing
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Sort numbers ascending
    Sort {
        /// Values to sort
        #[arg(allow_hyphen_values = true)]
        values: Vec<f64>,

        /// Algorithm to use (bubble, selection, merge, quick)
        #[arg(long, short)]
        algorithm: Option<SortAlgorithm>,
    },

    /// Binary search a sorted list
    Search {
        /// Value to look for
        #[arg(long, allow_hyphen_values = true)]
        target: i64,

        /// Sorted values
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },

    /// Report whether any value repeats
    Duplicates {
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },

    /// Find two positions whose values add up to the target
    TwoSum {
        #[arg(long, allow_hyphen_values = true)]
        target: i64,

        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },

    /// Two-pointer two-sum over sorted values (1-based positions)
    TwoSumSorted {
        #[arg(long, allow_hyphen_values = true)]
        target: i64,

        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },

    /// Check whether two words are anagrams (case-insensitive)
    Anagram { first: String, second: String },

    /// Group words that are anagrams of each other
    GroupAnagrams { words: Vec<String> },

    /// The k most frequent values
    TopK {
        #[arg(long, short)]
        k: usize,

        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },

    /// Product of all other values at each position
    Product {
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },

    /// Length of the longest run of consecutive integers
    LongestRun {
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },

    /// Breadth-first traversal of a JSON adjacency graph
    Bfs {
        /// JSON object mapping node to neighbor list
        graph: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        start: i64,
    },

    /// Depth-first traversal of a JSON adjacency graph
    Dfs {
        /// JSON object mapping node to neighbor list
        graph: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        start: i64,
    },

    /// Encode strings into one length-prefixed buffer
    Encode {
        items: Vec<String>,

        #[command(flatten)]
        framing: commands::Framing,
    },

    /// Decode a length-prefixed buffer
    Decode {
        buffer: String,

        #[command(flatten)]
        framing: commands::Framing,
    },

    /// Check whether text reads the same both ways
    Palindrome { text: String },

    /// Validate a sudoku board
    Sudoku {
        /// JSON file holding nine rows of nine single-character strings
        #[arg(long, conflicts_with = "rows")]
        file: Option<PathBuf>,

        /// Nine rows of nine characters, '.' for blanks
        rows: Vec<String>,
    },

    /// Memoized Fibonacci (fib(0) = fib(1) = 1)
    Fib { n: u64 },

    /// Primality test
    Prime { n: u64 },

    /// Run every algorithm on built-in inputs
    Demo,
}

fn init_logging(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Sort { values, algorithm } => {
            commands::sort(values, algorithm.unwrap_or(config.sort), format)
        }
        Commands::Search { target, values } => commands::search(&values, target, format),
        Commands::Duplicates { values } => commands::duplicates(&values, format),
        Commands::TwoSum { target, values } => commands::two_sum(&values, target, format),
        Commands::TwoSumSorted { target, values } => {
            commands::two_sum_sorted(&values, target, format)
        }
        Commands::Anagram { first, second } => commands::anagram(&first, &second, format),
        Commands::GroupAnagrams { words } => commands::group_anagrams(&words, format),
        Commands::TopK { k, values } => commands::top_k(&values, k, format),
        Commands::Product { values } => commands::product(&values, format),
        Commands::LongestRun { values } => commands::longest_run(&values, format),
        Commands::Bfs { graph, start } => commands::traverse(&graph, start, false, format),
        Commands::Dfs { graph, start } => commands::traverse(&graph, start, true, format),
        Commands::Encode { items, framing } => {
            commands::encode(&items, framing.apply(config.codec), format)
        }
        Commands::Decode { buffer, framing } => {
            commands::decode(&buffer, framing.apply(config.codec), format)
        }
        Commands::Palindrome { text } => commands::palindrome(&text, format),
        Commands::Sudoku { file, rows } => commands::sudoku(file.as_deref(), &rows, format),
        Commands::Fib { n } => commands::fib(n, format),
        Commands::Prime { n } => commands::prime(n, format),
        Commands::Demo => demo::run(&config, format),
    }
}
