//! Quicksort with a last-element pivot.
//!
//! Partitioning sends elements strictly less than the pivot to the left and
//! everything greater than or equal to it to the right. There is no pivot
//! randomization, so already-sorted, reverse-sorted and all-equal inputs hit
//! the O(n²) worst case.
//!
//! Only the smaller partition is handled recursively; the larger one is
//! processed by the enclosing loop, which bounds stack depth by O(log n)
//! even when the comparisons degrade to quadratic.

use core::cmp::Ordering;

/// Sorts `arr` ascending in place. Unstable.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    quick_sort_by(arr, T::cmp);
}

/// Sorts `arr` in place with `compare`. Unstable.
pub fn quick_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_rec(arr, &mut compare);
}

fn sort_rec<T, F>(mut arr: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while arr.len() > 1 {
        let pivot = partition(arr, compare);
        let (left, rest) = core::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut rest[1..];
        tracing::trace!(left = left.len(), right = right.len(), "partitioned");
        if left.len() < right.len() {
            sort_rec(left, compare);
            arr = right;
        } else {
            sort_rec(right, compare);
            arr = left;
        }
    }
}

/// Lomuto partition around the last element; returns the pivot's final index.
fn partition<T, F>(arr: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot_index = arr.len() - 1;
    let mut store = 0;
    for j in 0..pivot_index {
        if compare(&arr[j], &arr[pivot_index]) == Ordering::Less {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, pivot_index);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_sort_basic() {
        let mut v = vec![20, 9, 12, 55, 1, 13, 16, 21, 15, 3, 6, 8];
        quick_sort(&mut v);
        assert_eq!(v, vec![1, 3, 6, 8, 9, 12, 13, 15, 16, 20, 21, 55]);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut v = vec![5, 1, 7, 3, 5, 4];
        let p = partition(&mut v, &mut i32::cmp);
        assert_eq!(v[p], 4);
        assert!(v[..p].iter().all(|&x| x < 4));
        assert!(v[p + 1..].iter().all(|&x| x >= 4));
    }

    #[test]
    fn test_quick_sort_worst_cases() {
        let mut all_equal = vec![9; 5_000];
        quick_sort(&mut all_equal);
        assert!(all_equal.iter().all(|&x| x == 9));

        let mut descending: Vec<i64> = (0..5_000).rev().collect();
        quick_sort(&mut descending);
        assert_eq!(descending, (0..5_000).collect::<Vec<_>>());
    }

    #[test]
    fn test_quick_sort_by_key() {
        let mut words = vec!["banana", "kiwi", "apple", "fig"];
        quick_sort_by(&mut words, |a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
        assert_eq!(words, vec!["fig", "kiwi", "apple", "banana"]);
    }
}
