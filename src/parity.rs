//! Even/odd checking by mutual recursion
//!
//! `is_even` and `is_odd` are defined in terms of each other, decrementing
//! by one on every call. Recursion depth equals `|n|`, so very large inputs
//! exhaust the stack. [`check_parity`] switches to a direct remainder
//! check above a configurable limit.

use tracing::debug;

/// Default largest magnitude answered with the recursive pair
pub const DEFAULT_RECURSION_LIMIT: u64 = 10_000;

/// True when `n` is even
pub fn is_even(n: i64) -> bool {
    even_magnitude(n.unsigned_abs())
}

/// True when `n` is odd
pub fn is_odd(n: i64) -> bool {
    odd_magnitude(n.unsigned_abs())
}

fn even_magnitude(n: u64) -> bool {
    if n == 0 {
        return true;
    }
    odd_magnitude(n - 1)
}

fn odd_magnitude(n: u64) -> bool {
    if n == 0 {
        return false;
    }
    even_magnitude(n - 1)
}

/// Non-recursive form of [`is_even`], constant time for any magnitude
pub fn is_even_iterative(n: i64) -> bool {
    n.unsigned_abs() % 2 == 0
}

/// Non-recursive form of [`is_odd`], constant time for any magnitude
pub fn is_odd_iterative(n: i64) -> bool {
    !is_even_iterative(n)
}

/// How a parity answer was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParityMethod {
    Recursive,
    Iterative,
}

/// Result of checking one value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParityReport {
    pub value: i64,
    pub even: bool,
    pub odd: bool,
    pub method: ParityMethod,
}

/// Check parity, falling back to the remainder check when `|n|` exceeds `recursion_limit`
pub fn check_parity(n: i64, recursion_limit: u64) -> ParityReport {
    let (even, odd, method) = if n.unsigned_abs() <= recursion_limit {
        (is_even(n), is_odd(n), ParityMethod::Recursive)
    } else {
        debug!(value = n, limit = recursion_limit, "Using iterative parity fallback");
        (is_even_iterative(n), is_odd_iterative(n), ParityMethod::Iterative)
    };

    ParityReport {
        value: n,
        even,
        odd,
        method,
    }
}
