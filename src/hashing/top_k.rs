//! Frequency counting and top-k selection.

use core::hash::Hash;
use std::collections::HashMap;

/// Counts the occurrences of every distinct value in `arr`.
pub fn frequency_map<T: Hash + Eq + Clone>(arr: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for x in arr {
        *counts.entry(x.clone()).or_insert(0) += 1;
    }
    counts
}

/// Returns the `k` most frequent values of `arr`, most frequent first.
///
/// Values with equal frequency are ordered by their first occurrence in
/// `arr`. If `arr` has fewer than `k` distinct values, all of them are
/// returned.
///
/// ```rust
/// use algokit::hashing::top_k;
///
/// assert_eq!(top_k(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
/// // 32 and 22 both occur three times; 32 is seen first.
/// assert_eq!(top_k(&[32, 22, 11, 22, 32, 1, 10, 22, 32], 2), vec![32, 22]);
/// ```
pub fn top_k<T: Hash + Eq + Clone>(arr: &[T], k: usize) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }

    // value -> (count, index of first occurrence)
    let mut stats: HashMap<&T, (usize, usize)> = HashMap::new();
    for (i, x) in arr.iter().enumerate() {
        stats.entry(x).or_insert((0, i)).0 += 1;
    }

    let mut ranked: Vec<(&T, usize, usize)> = stats
        .into_iter()
        .map(|(x, (count, first))| (x, count, first))
        .collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    tracing::trace!(distinct = ranked.len(), k, "ranked frequencies");

    ranked.into_iter().take(k).map(|(x, _, _)| x.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_map() {
        let counts = frequency_map(&["a", "b", "a"]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&"a"], 2);
        assert_eq!(counts[&"b"], 1);
    }

    #[test]
    fn test_top_k_tie_break_by_first_occurrence() {
        assert_eq!(top_k(&[3, 1, 2, 1, 3, 2], 3), vec![3, 1, 2]);
        assert_eq!(top_k(&[32, 22, 11, 22, 32, 1, 10, 22, 32], 3), vec![32, 22, 11]);
    }

    #[test]
    fn test_top_k_bounds() {
        assert!(top_k(&[1, 2, 3], 0).is_empty());
        assert!(top_k::<i32>(&[], 3).is_empty());
        assert_eq!(top_k(&[5, 5, 6], 10), vec![5, 6]);
    }

    #[test]
    fn test_top_k_strings() {
        let words = ["b", "a", "b", "c", "a", "b"];
        assert_eq!(top_k(&words, 2), vec!["b", "a"]);
    }
}
