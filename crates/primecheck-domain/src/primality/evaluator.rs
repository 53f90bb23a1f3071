//! Trial-division primality evaluator.

/// Returns true if `n` is prime.
///
/// Values below 2 (negatives, 0 and 1) are never prime. Odd candidates are
/// tested against every odd divisor up to and including `isqrt(n)`, so the
/// loop runs at most about 1.5 billion iterations for the largest `i64`.
///
/// The bound is the integer square root. A floating-point `sqrt` loses
/// precision above 2^53 and can land one below the true root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let limit = n.isqrt();
    let mut divisor = 3;
    while divisor <= limit {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

/// Evaluates every candidate, returning results in input order.
pub fn evaluate(candidates: &[i64]) -> Vec<bool> {
    candidates.iter().map(|&n| is_prime(n)).collect()
}
