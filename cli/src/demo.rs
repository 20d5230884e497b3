//! Fixed inputs run through every routine, one labelled line each.

use crate::config::CliConfig;
use crate::output::{print_labelled, OutputFormat};
use algokit::graph::AdjacencyGraph;
use algokit::validation::SudokuBoard;
use algokit::{hashing, numeric, searching, sorting, validation, Codec};
use anyhow::{Context, Result};

const SUDOKU: [&str; 9] = [
    "53..7....",
    "6..195...",
    ".98....6.",
    "8...6...3",
    "4..8.3..1",
    "7...2...6",
    ".6....28.",
    "...419..5",
    "....8..79",
];

pub fn run(config: &CliConfig, format: OutputFormat) -> Result<()> {
    let mut bubble = vec![93, 62, 55, 40, 33, 21, 12, 5, 4, 2, 1];
    sorting::bubble_sort(&mut bubble);
    print_labelled("bubble_sort", &bubble, format)?;

    let mut selection = vec![505.0, 25.0, 1.0, 15.0, 12.0, 0.0021];
    sorting::selection_sort_by(&mut selection, f64::total_cmp);
    print_labelled("selection_sort", &selection, format)?;

    let merged = sorting::merge_sort(&[38, 27, 43, 3, 9, 82, 10]);
    print_labelled("merge_sort", &merged, format)?;

    let mut quick = vec![20, 9, 12, 55, 1, 13, 16, 21, 15, 3, 6, 8];
    sorting::quick_sort(&mut quick);
    print_labelled("quick_sort", &quick, format)?;

    let mut configured = vec![5, 3, 9, 1];
    config.sort.sort(&mut configured);
    print_labelled(&format!("{}_sort (configured)", config.sort), &configured, format)?;

    let haystack = [3, 5, 8, 10, 12, 15, 20, 25, 30, 40];
    print_labelled("binary_search 44", &searching::binary_search(&haystack, &44), format)?;
    print_labelled("binary_search 25", &searching::binary_search(&haystack, &25), format)?;

    print_labelled("has_duplicate", &hashing::has_duplicate(&[1, 2, 3, 4, 4, 8, 9]), format)?;
    print_labelled("two_sum", &hashing::two_sum(&[2, 7, 11, 15], 13), format)?;
    print_labelled(
        "two_sum_sorted",
        &hashing::two_sum_sorted(&[12, 23, 43, 65, 99, 106], 142),
        format,
    )?;
    print_labelled("is_anagram Mary/Army", &hashing::is_anagram("Mary", "Army"), format)?;
    print_labelled(
        "is_anagram Tamil/Telug",
        &hashing::is_anagram_by_count("Tamil", "Telug"),
        format,
    )?;
    print_labelled(
        "group_anagrams",
        &hashing::group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]),
        format,
    )?;
    print_labelled(
        "top_k",
        &hashing::top_k(&[32, 22, 11, 22, 32, 1, 10, 22, 32], 2),
        format,
    )?;
    print_labelled(
        "product_except_self",
        &hashing::product_except_self(&[1, 2, 3, 4]),
        format,
    )?;
    print_labelled(
        "longest_consecutive_run",
        &hashing::longest_consecutive_run(&[100, 4, 200, 1, 3, 2, 101, 102, 103, 104]),
        format,
    )?;

    let bfs_graph: AdjacencyGraph<u32> = [
        (0, vec![1]),
        (1, vec![0, 4]),
        (2, vec![0, 4]),
        (3, vec![0, 4]),
        (4, vec![1, 2, 3]),
        (5, vec![]),
    ]
    .into_iter()
    .collect();
    print_labelled("bfs", &bfs_graph.bfs(&0), format)?;

    let dfs_graph: AdjacencyGraph<u32> = [
        (0, vec![1, 2]),
        (1, vec![3]),
        (2, vec![4]),
        (3, vec![]),
        (4, vec![]),
    ]
    .into_iter()
    .collect();
    print_labelled("dfs", &dfs_graph.dfs(&0), format)?;

    let codec = Codec::new(config.codec).context("invalid codec framing")?;
    let encoded = codec.encode(&["a", "b", "c", "d"]);
    print_labelled("encode", &encoded, format)?;
    print_labelled("decode", &codec.decode(&encoded)?, format)?;

    for text in ["A man, a plan, a canal: Panama", "race a car", "malayalam"] {
        print_labelled(
            &format!("is_palindrome {text:?}"),
            &validation::is_palindrome(text),
            format,
        )?;
    }

    let board = SudokuBoard::from_strs(&SUDOKU)?;
    print_labelled("is_valid_sudoku", &board.is_valid(), format)?;

    print_labelled("fibonacci 5", &numeric::fibonacci(5)?, format)?;
    let primes: Vec<u64> = [5, 15, 7, 17, 97]
        .into_iter()
        .filter(|&n| numeric::is_prime(n))
        .collect();
    print_labelled("is_prime of [5, 15, 7, 17, 97]", &primes, format)?;

    Ok(())
}
