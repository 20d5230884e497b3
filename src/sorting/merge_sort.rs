//! Top-down merge sort.
//!
//! The input is left untouched; a sorted copy is returned. The split point is
//! `ceil((n - 1) / 2)`, so for odd lengths the right half is the larger one.

use core::cmp::Ordering;

/// Returns a sorted copy of `arr`. Stable.
///
/// ```rust
/// use algokit::sorting::merge_sort;
///
/// assert_eq!(merge_sort(&[38, 27, 43, 3, 9, 82, 10]), vec![3, 9, 10, 27, 38, 43, 82]);
/// ```
pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    merge_sort_by(arr, T::cmp)
}

/// Returns a copy of `arr` sorted with `compare`. Stable.
pub fn merge_sort_by<T, F>(arr: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_rec(arr, &mut compare)
}

fn sort_rec<T, F>(arr: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let mid = arr.len() / 2;
    let (left, right) = arr.split_at(mid);
    let left = sort_rec(left, compare);
    let right = sort_rec(right, compare);
    merge(left, right, compare)
}

/// Merges two sorted runs. On ties the left run wins, which is what keeps
/// the sort stable.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::trace!(left = left.len(), right = right.len(), "merging runs");
    let mut sorted = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if compare(l, r) == Ordering::Greater {
            right.next()
        } else {
            left.next()
        };
        sorted.extend(next);
    }
    sorted.extend(left);
    sorted.extend(right);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_basic() {
        let input = [38, 27, 43, 3, 9, 82, 10];
        assert_eq!(merge_sort(&input), vec![3, 9, 10, 27, 38, 43, 82]);
        // Input is not touched.
        assert_eq!(input, [38, 27, 43, 3, 9, 82, 10]);
    }

    #[test]
    fn test_merge_sort_edges() {
        assert!(merge_sort::<i32>(&[]).is_empty());
        assert_eq!(merge_sort(&[1]), vec![1]);
        assert_eq!(merge_sort(&[2, 1]), vec![1, 2]);
        assert_eq!(merge_sort(&[5, 5, 5]), vec![5, 5, 5]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let input = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
        let sorted = merge_sort_by(&input, |a, b| a.0.cmp(&b.0));
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]);
    }

    #[test]
    fn test_merge_sort_strings() {
        let input = ["tan", "eat", "bat", "ate"];
        assert_eq!(merge_sort(&input), vec!["ate", "bat", "eat", "tan"]);
    }
}
