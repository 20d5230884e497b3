//! Primality by 6k ± 1 trial division.

/// Returns `true` if `n` is prime.
///
/// After ruling out multiples of 2 and 3, every remaining prime factor has
/// the form `6k ± 1`, so only those candidates up to and including `√n` are
/// tried.
///
/// ```rust
/// use algokit::numeric::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(25));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n <= 1 || n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    // i <= n / i is i * i <= n without overflow.
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        let primes: Vec<u64> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]);
    }

    #[test]
    fn test_prime_squares_are_composite() {
        for p in [5u64, 7, 11, 13, 101] {
            assert!(!is_prime(p * p), "{}", p * p);
        }
        assert!(!is_prime(35));
    }

    #[test]
    fn test_large() {
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(u64::MAX));
    }
}
