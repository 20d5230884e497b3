//! Comparison sorts.
//!
//! | Algorithm | In place | Stable | Comparisons |
//! |-----------|----------|--------|-------------|
//! | [`bubble_sort`] | yes | no | O(n²) |
//! | [`selection_sort`] | yes | no | O(n²) |
//! | [`merge_sort`] | no, returns a new `Vec` | yes | O(n log n) |
//! | [`quick_sort`] | yes | no | O(n log n) average, O(n²) worst |
//!
//! Every algorithm has a `*_by` variant taking a comparator, which is how
//! types without a total order (e.g. `f64` via [`f64::total_cmp`]) are sorted.
//! [`SortAlgorithm`] names the algorithms so callers can pick one at runtime.

pub mod bubble_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod selection_sort;

pub use bubble_sort::{bubble_sort, bubble_sort_by};
pub use merge_sort::{merge_sort, merge_sort_by};
pub use quick_sort::{quick_sort, quick_sort_by};
pub use selection_sort::{selection_sort, selection_sort_by};

use crate::error::{AlgoError, Result};
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// The sorting algorithms provided by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    /// Adjacent compare-and-swap passes.
    Bubble,
    /// Repeated selection of the minimum of the unsorted suffix.
    Selection,
    /// Top-down merge sort.
    #[default]
    Merge,
    /// Last-element-pivot quicksort.
    Quick,
}

impl SortAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, SortAlgorithm::Merge)
    }

    /// Whether the algorithm rearranges the input without a scratch copy.
    pub fn is_in_place(self) -> bool {
        !matches!(self, SortAlgorithm::Merge)
    }

    /// Sorts `arr` ascending by the natural order.
    pub fn sort<T: Ord + Clone>(self, arr: &mut [T]) {
        self.sort_by(arr, T::cmp);
    }

    /// Sorts `arr` with `compare`.
    ///
    /// Merge sort writes its result back into `arr`, so the slice is sorted
    /// afterwards regardless of which algorithm ran.
    pub fn sort_by<T, F>(self, arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            SortAlgorithm::Bubble => bubble_sort_by(arr, compare),
            SortAlgorithm::Selection => selection_sort_by(arr, compare),
            SortAlgorithm::Merge => {
                let sorted = merge_sort_by(arr, compare);
                arr.clone_from_slice(&sorted);
            }
            SortAlgorithm::Quick => quick_sort_by(arr, compare),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self> {
        SortAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                AlgoError::invalid(format!(
                    "unknown sort algorithm `{s}` (expected bubble, selection, merge or quick)"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_algorithm_sorts() {
        for algo in SortAlgorithm::ALL {
            let mut v = vec![93, 62, 55, 40, 33, 21, 12, 5, 4, 2, 1];
            algo.sort(&mut v);
            assert_eq!(v, vec![1, 2, 4, 5, 12, 21, 33, 40, 55, 62, 93], "{algo}");
        }
    }

    #[test]
    fn test_sort_by_floats() {
        for algo in SortAlgorithm::ALL {
            let mut v = vec![505.0, 25.0, 1.0, 15.0, 12.0, 0.0021];
            algo.sort_by(&mut v, f64::total_cmp);
            assert_eq!(v, vec![0.0021, 1.0, 12.0, 15.0, 25.0, 505.0], "{algo}");
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("quick".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Quick);
        assert_eq!("Merge".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Merge);
        assert!(matches!(
            "heap".parse::<SortAlgorithm>(),
            Err(AlgoError::InvalidInput(_))
        ));
        for algo in SortAlgorithm::ALL {
            assert_eq!(algo.name().parse::<SortAlgorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn test_properties() {
        assert!(SortAlgorithm::Merge.is_stable());
        assert!(!SortAlgorithm::Merge.is_in_place());
        assert!(!SortAlgorithm::Quick.is_stable());
        assert!(SortAlgorithm::Bubble.is_in_place());
    }
}
