//! Duplicate detection.

use core::hash::Hash;
use std::collections::HashSet;

/// Returns `true` if any value occurs more than once.
///
/// Stops at the first repeat.
pub fn has_duplicate<T: Hash + Eq>(arr: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(arr.len());
    arr.iter().any(|x| !seen.insert(x))
}

/// Returns `true` if the set of distinct values is smaller than `arr`.
///
/// Same answer as [`has_duplicate`] but always consumes the whole slice.
pub fn has_duplicate_by_count<T: Hash + Eq>(arr: &[T]) -> bool {
    arr.iter().collect::<HashSet<_>>().len() != arr.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_duplicate() {
        assert!(has_duplicate(&[1, 2, 3, 1]));
        assert!(has_duplicate(&[1, 2, 3, 4, 4, 8, 9]));
        assert!(!has_duplicate(&[1, 2, 3, 4]));
        assert!(!has_duplicate::<i32>(&[]));
        assert!(has_duplicate(&["a", "b", "a"]));
    }

    #[test]
    fn test_variants_agree() {
        let cases: [&[i32]; 5] = [&[], &[1], &[1, 1], &[1, 2, 3], &[3, 2, 1, 2]];
        for case in cases {
            assert_eq!(has_duplicate(case), has_duplicate_by_count(case), "{case:?}");
        }
    }
}
