//! Product of all elements except self.

use crate::error::{AlgoError, Result};
use core::ops::Mul;
use num_traits::{CheckedMul, One};

/// For each index `i`, returns the product of every element except `arr[i]`.
///
/// Two passes without division: `out[i]` is first set to the product of
/// `arr[..i]`, then multiplied by a running product of `arr[i + 1..]` from
/// the right. O(n) time and O(1) space beyond the output. A single zero
/// leaves its own slot as the product of the rest and zeroes every other
/// slot; two or more zeros zero everything.
///
/// Overflow follows `T`'s own multiplication; use
/// [`checked_product_except_self`] for integers that may overflow.
///
/// ```rust
/// use algokit::hashing::product_except_self;
///
/// assert_eq!(product_except_self(&[1, 2, 3, 4]), vec![24, 12, 8, 6]);
/// assert_eq!(product_except_self(&[0, 2, 3]), vec![6, 0, 0]);
/// ```
pub fn product_except_self<T>(arr: &[T]) -> Vec<T>
where
    T: Copy + One + Mul<Output = T>,
{
    let n = arr.len();
    if n == 0 {
        return Vec::new();
    }
    let mut out = vec![T::one(); n];

    // The product of all elements is never formed.
    for i in 1..n {
        out[i] = out[i - 1] * arr[i - 1];
    }
    let mut suffix = T::one();
    for i in (0..n - 1).rev() {
        suffix = suffix * arr[i + 1];
        out[i] = out[i] * suffix;
    }
    out
}

/// Same passes as [`product_except_self`], with every multiplication checked.
///
/// # Errors
///
/// [`AlgoError::Overflow`] if a prefix product, suffix product or output
/// value does not fit in `T`.
///
/// ```rust
/// use algokit::hashing::checked_product_except_self;
///
/// assert_eq!(checked_product_except_self(&[1i64, 2, 3, 4]), Ok(vec![24, 12, 8, 6]));
/// assert!(checked_product_except_self(&[10_000_000_000i64; 3]).is_err());
/// ```
pub fn checked_product_except_self<T>(arr: &[T]) -> Result<Vec<T>>
where
    T: Copy + One + CheckedMul,
{
    const WHAT: &str = "product except self";
    let n = arr.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    let mut out = vec![T::one(); n];

    for i in 1..n {
        out[i] = out[i - 1]
            .checked_mul(&arr[i - 1])
            .ok_or(AlgoError::Overflow(WHAT))?;
    }
    let mut suffix = T::one();
    for i in (0..n - 1).rev() {
        suffix = suffix
            .checked_mul(&arr[i + 1])
            .ok_or(AlgoError::Overflow(WHAT))?;
        out[i] = out[i].checked_mul(&suffix).ok_or(AlgoError::Overflow(WHAT))?;
    }
    Ok(out)
}
