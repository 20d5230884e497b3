//! Bubble sort.

use core::cmp::Ordering;

/// Sorts `arr` ascending in place.
///
/// Not stable in contract: callers must not rely on the order of equal
/// elements.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    bubble_sort_by(arr, T::cmp);
}

/// Sorts `arr` in place with `compare`.
///
/// After pass `i` the last `i + 1` elements are in their final positions.
/// A pass that performs no swap ends the sort early.
pub fn bubble_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = arr.len();
    for i in 0..len {
        let mut swapped = false;
        for j in 0..len - i - 1 {
            if compare(&arr[j], &arr[j + 1]) == Ordering::Greater {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            tracing::trace!(passes = i + 1, "bubble sort settled early");
            break;
        }
    }
}
