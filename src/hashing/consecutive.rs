//! Longest run of consecutive integers.

use core::hash::Hash;
use num_traits::PrimInt;
use std::collections::HashSet;

/// Returns the length of the longest run of consecutive integers whose
/// members all occur in `arr`, in any order. Duplicates count once.
///
/// A run is only expanded from its start (a value whose predecessor is
/// absent), so every value is visited O(1) times overall. `T::min_value()`
/// is always a start, and expansion stops at `T::max_value()`.
///
/// ```rust
/// use algokit::hashing::longest_consecutive_run;
///
/// assert_eq!(longest_consecutive_run(&[100, 4, 200, 1, 3, 2]), 4);
/// assert_eq!(longest_consecutive_run::<i32>(&[]), 0);
/// ```
pub fn longest_consecutive_run<T: PrimInt + Hash>(arr: &[T]) -> usize {
    let values: HashSet<T> = arr.iter().copied().collect();
    let one = T::one();
    let mut longest = 0;

    for &start in &values {
        let is_start = start
            .checked_sub(&one)
            .map_or(true, |prev| !values.contains(&prev));
        if !is_start {
            continue;
        }

        let mut current = start;
        let mut streak = 1;
        while let Some(next) = current.checked_add(&one) {
            if !values.contains(&next) {
                break;
            }
            current = next;
            streak += 1;
        }
        longest = longest.max(streak);
    }
    longest
}
