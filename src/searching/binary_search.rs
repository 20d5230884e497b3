//! Binary search over an ascending slice.
//!
//! The search keeps a closed interval `[low, high]` of candidate indices and
//! halves it each step. Not-found is reported as `None`, never as an error.

use crate::error::{AlgoError, Result};
use core::cmp::Ordering;

/// Returns the index of an element equal to `target`, or `None`.
///
/// `arr` must be sorted ascending; this is not checked, and an unsorted
/// slice gives an unspecified result. Use [`checked_binary_search`] to
/// validate it. O(log n) comparisons. When several elements equal `target` any one of their indices may be
/// returned.
///
/// ```rust
/// use algokit::searching::binary_search;
///
/// let arr = [3, 5, 8, 10, 12, 15, 20, 25, 30, 40];
/// assert_eq!(binary_search(&arr, &12), Some(4));
/// assert_eq!(binary_search(&arr, &44), None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    binary_search_by(arr, |probe| probe.cmp(target))
}

/// Binary search driven by `probe`, which reports how an element compares
/// to the sought value.
pub fn binary_search_by<T, F>(arr: &[T], mut probe: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    if arr.is_empty() {
        return None;
    }
    let mut low = 0;
    let mut high = arr.len() - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        tracing::trace!(low, high, mid, "binary search step");
        match probe(&arr[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
            Ordering::Less => low = mid + 1,
        }
    }
    None
}

/// Like [`binary_search`], but verifies the ascending precondition first.
///
/// Validation costs O(n), which dominates the O(log n) search.
///
/// # Errors
///
/// Returns [`AlgoError::InvalidInput`] if `arr` is not sorted ascending.
pub fn checked_binary_search<T: Ord>(arr: &[T], target: &T) -> Result<Option<usize>> {
    if let Some(pos) = arr.windows(2).position(|w| w[0] > w[1]) {
        return Err(AlgoError::invalid(format!(
            "binary search input is not sorted: element {} is greater than element {}",
            pos,
            pos + 1
        )));
    }
    Ok(binary_search_by(arr, |probe| probe.cmp(target)))
}

/// Returns `true` if `arr` is sorted ascending (non-decreasing).
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_search_hits_every_element() {
        let arr = [3, 5, 8, 10, 12, 15, 20, 25, 30, 40];
        for (i, x) in arr.iter().enumerate() {
            assert_eq!(binary_search(&arr, x), Some(i));
        }
    }

    #[test]
    fn test_binary_search_misses() {
        let arr = [3, 5, 8, 10, 12, 15, 20, 25, 30, 40];
        assert_eq!(binary_search(&arr, &44), None);
        assert_eq!(binary_search(&arr, &1), None);
        assert_eq!(binary_search(&arr, &11), None);
    }

    #[test]
    fn test_binary_search_empty_and_single() {
        let empty: [i32; 0] = [];
        assert_eq!(binary_search(&empty, &1), None);
        assert_eq!(binary_search(&[7], &7), Some(0));
        assert_eq!(binary_search(&[7], &6), None);
        assert_eq!(binary_search(&[7], &8), None);
    }

    #[test]
    fn test_binary_search_by_key() {
        let people = [("ada", 36), ("bob", 41), ("cy", 58)];
        assert_eq!(binary_search_by(&people, |p| p.1.cmp(&41)), Some(1));
        assert_eq!(binary_search_by(&people, |p| p.1.cmp(&40)), None);
    }

    #[test]
    fn test_unsorted_input_does_not_panic() {
        let arr = [9, 1, 8, 2];
        if let Some(i) = binary_search(&arr, &8) {
            assert_eq!(arr[i], 8);
        }
    }

    #[test]
    fn test_checked_binary_search() {
        assert_eq!(checked_binary_search(&[1, 2, 3], &3), Ok(Some(2)));
        assert_eq!(checked_binary_search(&[1, 2, 3], &4), Ok(None));
        assert!(matches!(
            checked_binary_search(&[1, 3, 2], &3),
            Err(AlgoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
