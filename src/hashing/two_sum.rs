//! Pair-sum lookups.

use core::hash::Hash;
use num_traits::{CheckedSub, PrimInt};
use std::collections::HashMap;

/// Finds indices `(i, j)`, `i < j`, with `arr[i] + arr[j] == target`.
///
/// Single pass: for each `j` the complement `target - arr[j]` is looked up
/// among the values already seen, so the pair returned is the one whose
/// second index comes first. A repeated value remembers its latest index.
/// A complement that overflows `T` cannot be in the slice and is skipped.
///
/// ```rust
/// use algokit::hashing::two_sum;
///
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[2, 7, 11, 15], 100), None);
/// ```
pub fn two_sum<T>(arr: &[T], target: T) -> Option<(usize, usize)>
where
    T: Copy + Eq + Hash + CheckedSub,
{
    let mut seen: HashMap<T, usize> = HashMap::with_capacity(arr.len());
    for (j, &value) in arr.iter().enumerate() {
        if let Some(complement) = target.checked_sub(&value) {
            if let Some(&i) = seen.get(&complement) {
                return Some((i, j));
            }
        }
        seen.insert(value, j);
    }
    None
}

/// Two-pointer pair search over an ascending slice.
///
/// Returns **1-based** indices `(left, right)`. The left pointer advances
/// while the sum is below `target`, the right pointer retreats while it is
/// above. Sums that overflow `T` are classified by sign without wrapping.
///
/// ```rust
/// use algokit::hashing::two_sum_sorted;
///
/// assert_eq!(two_sum_sorted(&[2, 7, 11, 15], 9), Some((1, 2)));
/// assert_eq!(two_sum_sorted(&[1, 3, 5, 8], 11), Some((2, 4)));
/// ```
pub fn two_sum_sorted<T: PrimInt>(arr: &[T], target: T) -> Option<(usize, usize)> {
    if arr.len() < 2 {
        return None;
    }
    let (mut left, mut right) = (0, arr.len() - 1);
    while left < right {
        let ordering = match arr[left].checked_add(&arr[right]) {
            Some(sum) => sum.cmp(&target),
            // Both operands share a sign when addition overflows.
            None if arr[left] > T::zero() => core::cmp::Ordering::Greater,
            None => core::cmp::Ordering::Less,
        };
        match ordering {
            core::cmp::Ordering::Equal => return Some((left + 1, right + 1)),
            core::cmp::Ordering::Less => left += 1,
            core::cmp::Ordering::Greater => right -= 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sum_basic() {
        assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
        assert_eq!(two_sum(&[2, 7, 11, 15], 13), Some((0, 2)));
        assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
        assert_eq!(two_sum(&[3, 3], 6), Some((0, 1)));
    }

    #[test]
    fn test_two_sum_not_found() {
        assert_eq!(two_sum::<i32>(&[], 0), None);
        assert_eq!(two_sum(&[5], 10), None);
        assert_eq!(two_sum(&[1, 2, 3], 7), None);
    }

    #[test]
    fn test_two_sum_never_pairs_element_with_itself() {
        assert_eq!(two_sum(&[4, 1], 8), None);
    }

    #[test]
    fn test_two_sum_repeated_value_uses_latest_index() {
        assert_eq!(two_sum(&[2, 2, 5], 7), Some((1, 2)));
    }

    #[test]
    fn test_two_sum_overflowing_complement() {
        assert_eq!(two_sum(&[i8::MIN, 100, 27], 127), Some((1, 2)));
        assert_eq!(two_sum(&[0u8, 1], 0), None);
    }

    #[test]
    fn test_two_sum_sorted() {
        assert_eq!(two_sum_sorted(&[12, 23, 43, 65, 99, 106], 142), Some((3, 5)));
        assert_eq!(two_sum_sorted(&[1, 2], 4), None);
        assert_eq!(two_sum_sorted::<i32>(&[], 4), None);
        assert_eq!(two_sum_sorted(&[5], 10), None);
    }

    #[test]
    fn test_two_sum_sorted_overflow() {
        assert_eq!(two_sum_sorted(&[10i8, 100, 120], 110), Some((1, 2)));
        assert_eq!(two_sum_sorted(&[-120i8, -100, -20], -120), Some((2, 3)));
    }
}
