//! Selection sort.

use core::cmp::Ordering;

/// Sorts `arr` ascending in place.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    selection_sort_by(arr, T::cmp);
}

/// Sorts `arr` in place with `compare`.
///
/// Unstable: the swap that brings the minimum forward can carry an element
/// past others equal to it.
pub fn selection_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = arr.len();
    for i in 0..len {
        let mut min_index = i;
        for j in i + 1..len {
            if compare(&arr[j], &arr[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        if min_index != i {
            arr.swap(i, min_index);
        }
    }
}
