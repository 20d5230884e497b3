//! Number-theoretic helpers: memoized Fibonacci and primality.

pub mod fibonacci;
pub mod primes;

pub use fibonacci::{fibonacci, memoized_fibonacci, FibonacciMemo, MAX_FIBONACCI_INDEX};
pub use primes::is_prime;
