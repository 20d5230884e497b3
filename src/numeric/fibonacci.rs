//! Memoized Fibonacci.
//!
//! This sequence starts `1, 1, 2, 3, 5, 8, ...`: indices 0 and 1 both map to
//! 1, so `fibonacci(n)` here equals the conventional `F(n + 1)`.

use crate::error::{AlgoError, Result};
use std::collections::HashMap;

/// Largest index whose value fits in a `u64`.
pub const MAX_FIBONACCI_INDEX: u64 = 92;

/// Cache of already computed values, keyed by index.
///
/// Owned by the caller, so it can be shared across calls deliberately; a
/// fresh memo holds only the two base cases.
#[derive(Debug, Clone)]
pub struct FibonacciMemo {
    values: HashMap<u64, u64>,
}

impl FibonacciMemo {
    /// A memo seeded with the base cases `0 -> 1` and `1 -> 1`.
    pub fn new() -> Self {
        Self {
            values: HashMap::from([(0, 1), (1, 1)]),
        }
    }

    /// Number of cached indices.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: the base cases are never evicted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The cached value for `n`, if computed.
    pub fn get(&self, n: u64) -> Option<u64> {
        self.values.get(&n).copied()
    }
}

impl Default for FibonacciMemo {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the value at index `n`, reading and filling `memo`.
///
/// Each index is computed at most once per memo; recursion depth is bounded
/// by [`MAX_FIBONACCI_INDEX`].
///
/// # Errors
///
/// [`AlgoError::Overflow`] if `n > MAX_FIBONACCI_INDEX`.
///
/// ```rust
/// use algokit::numeric::{memoized_fibonacci, FibonacciMemo};
///
/// let mut memo = FibonacciMemo::new();
/// assert_eq!(memoized_fibonacci(5, &mut memo), Ok(8));
/// assert_eq!(memo.get(4), Some(5));
/// ```
pub fn memoized_fibonacci(n: u64, memo: &mut FibonacciMemo) -> Result<u64> {
    if n > MAX_FIBONACCI_INDEX {
        return Err(AlgoError::Overflow("fibonacci value beyond u64"));
    }
    Ok(fill(n, memo))
}

fn fill(n: u64, memo: &mut FibonacciMemo) -> u64 {
    if let Some(v) = memo.get(n) {
        return v;
    }
    let v = fill(n - 1, memo) + fill(n - 2, memo);
    memo.values.insert(n, v);
    v
}

/// Computes the value at index `n` with a memo scoped to this call.
///
/// # Errors
///
/// Same as [`memoized_fibonacci`].
pub fn fibonacci(n: u64) -> Result<u64> {
    memoized_fibonacci(n, &mut FibonacciMemo::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(fibonacci(0), Ok(1));
        assert_eq!(fibonacci(1), Ok(1));
    }

    #[test]
    fn test_sequence() {
        let seq: Vec<u64> = (0..10).map(|n| fibonacci(n).unwrap()).collect();
        assert_eq!(seq, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn test_memo_is_reused() {
        let mut memo = FibonacciMemo::new();
        assert_eq!(memo.len(), 2);
        assert_eq!(memoized_fibonacci(10, &mut memo), Ok(89));
        assert_eq!(memo.len(), 11);
        // Served from the cache without growing it.
        assert_eq!(memoized_fibonacci(7, &mut memo), Ok(21));
        assert_eq!(memo.len(), 11);
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(fibonacci(MAX_FIBONACCI_INDEX), Ok(12_200_160_415_121_876_738));
        assert!(matches!(
            fibonacci(MAX_FIBONACCI_INDEX + 1),
            Err(AlgoError::Overflow(_))
        ));
        assert!(fibonacci(u64::MAX).is_err());
    }
}
