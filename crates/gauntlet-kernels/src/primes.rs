//! Trial-division prime counting.

use rayon::prelude::*;

/// `true` if `n` is prime.
///
/// Anything below 2 is not prime. Candidates are tested against 2, 3 and
/// then divisors of the form `6k ± 1` up to `√n`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Number of primes in `[start, end)`. An empty or inverted range counts 0.
pub fn count_primes(start: i64, end: i64) -> u64 {
    let mut count = 0;
    for n in start..end {
        if is_prime(n) {
            count += 1;
        }
    }
    count
}

/// Parallel [`count_primes`]. Counting is exact, so the result is equal.
pub fn par_count_primes(start: i64, end: i64) -> u64 {
    if start >= end {
        return 0;
    }
    (start..end)
        .into_par_iter()
        .filter(|&n| is_prime(n))
        .count() as u64
}
